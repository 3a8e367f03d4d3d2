use std::future::Future;

use serde::Serialize;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TelegramApiService: Send + Sync + 'static {
    /// Send a text message through the bot identified by `bot_token`.
    fn send_message(
        &self,
        bot_token: &str,
        message: TelegramMessage,
    ) -> impl Future<Output = Result<(), TelegramSendMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelegramMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: TelegramParseMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TelegramParseMode {
    #[serde(rename = "HTML")]
    Html,
    MarkdownV2,
}

#[derive(Debug, Error)]
pub enum TelegramSendMessageError {
    /// The bot API answered with a non-success status.
    #[error("Telegram rejected the message with status {status}.")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockTelegramApiService {
    pub fn with_send_message(
        mut self,
        bot_token: String,
        message: TelegramMessage,
        result: Result<(), TelegramSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(
                mockall::predicate::eq(bot_token),
                mockall::predicate::eq(message),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
