use std::sync::Arc;

use anyhow::{anyhow, Context};
use folio_di::Build;
use folio_extern_contracts::telegram::{
    TelegramApiService, TelegramMessage, TelegramSendMessageError,
};
use tracing::{debug, warn};
use url::Url;

use crate::http::HttpClient;

const API_ENDPOINT: &str = "https://api.telegram.org/";

#[derive(Debug, Clone, Build)]
pub struct TelegramApiServiceImpl {
    config: TelegramApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TelegramApiServiceConfig {
    api_endpoint: Arc<Url>,
}

impl TelegramApiServiceConfig {
    pub fn new(api_endpoint_override: Option<Url>) -> Self {
        Self {
            api_endpoint: api_endpoint_override
                .unwrap_or_else(|| Url::parse(API_ENDPOINT).expect("valid default endpoint"))
                .into(),
        }
    }

    fn method_url(&self, bot_token: &str, method: &str) -> anyhow::Result<Url> {
        let mut url = (*self.api_endpoint).clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Telegram api endpoint {} cannot be a base", self.api_endpoint))?
            .pop_if_empty()
            .push(&format!("bot{bot_token}"))
            .push(method);
        Ok(url)
    }
}

impl TelegramApiService for TelegramApiServiceImpl {
    async fn send_message(
        &self,
        bot_token: &str,
        message: TelegramMessage,
    ) -> Result<(), TelegramSendMessageError> {
        let url = self.config.method_url(bot_token, "sendMessage")?;

        let response = self
            .client
            .post(url)
            .json(&message)
            .send()
            .await
            .context("Failed to send request to the telegram bot api")?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, chat_id = %message.chat_id, "telegram accepted the message");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .context("Failed to read telegram error response")?;
        let body = match serde_json::from_str(&body) {
            Ok(body) => body,
            Err(_) => serde_json::Value::String(body),
        };

        warn!(%status, %body, "telegram rejected the message");

        Err(TelegramSendMessageError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
