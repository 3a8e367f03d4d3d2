use std::sync::Arc;

use folio_core_contact_contracts::{ContactFeatureService, ContactRelayError};
use folio_di::Build;
use folio_extern_contracts::telegram::{
    TelegramApiService, TelegramMessage, TelegramParseMode, TelegramSendMessageError,
};
use folio_models::{
    client_address::ClientAddressInfo, contact::ContactSubmission, Sensitive,
};
use folio_shared_contracts::time::TimeService;
use tracing::{info, warn};

pub use notification::format_notification;

mod notification;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Time, TelegramApi> {
    time: Time,
    telegram_api: TelegramApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// `None` if the bot token or the chat id is not configured.
    pub credentials: Option<Arc<ContactRelayCredentials>>,
}

#[derive(Debug)]
pub struct ContactRelayCredentials {
    pub bot_token: Sensitive<String>,
    pub chat_id: String,
}

impl<Time, TelegramApi> ContactFeatureService for ContactFeatureServiceImpl<Time, TelegramApi>
where
    Time: TimeService,
    TelegramApi: TelegramApiService,
{
    #[tracing::instrument(skip_all, fields(%client_address))]
    async fn relay_submission(
        &self,
        submission: ContactSubmission,
        client_address: ClientAddressInfo,
    ) -> Result<(), ContactRelayError> {
        let Some(credentials) = self.config.credentials.as_deref() else {
            warn!("telegram credentials are not configured, dropping submission");
            return Err(ContactRelayError::Configuration);
        };

        let now = self.time.now();
        let text = format_notification(
            &submission,
            &client_address,
            now,
            self.time.local_offset(now),
        );

        let message = TelegramMessage {
            chat_id: credentials.chat_id.clone(),
            text,
            parse_mode: TelegramParseMode::Html,
        };

        match self
            .telegram_api
            .send_message(&credentials.bot_token, message)
            .await
        {
            Ok(()) => {
                info!("relayed contact submission");
                Ok(())
            }
            Err(TelegramSendMessageError::Rejected { body, .. }) => {
                Err(ContactRelayError::Rejected(body))
            }
            Err(TelegramSendMessageError::Other(err)) => Err(ContactRelayError::Other(err)),
        }
    }
}
