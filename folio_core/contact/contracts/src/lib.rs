use std::future::Future;

use folio_models::{client_address::ClientAddressInfo, contact::ContactSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Format the submission as a notification and relay it to the
    /// configured chat.
    fn relay_submission(
        &self,
        submission: ContactSubmission,
        client_address: ClientAddressInfo,
    ) -> impl Future<Output = Result<(), ContactRelayError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactRelayError {
    #[error("Telegram configuration missing")]
    Configuration,
    /// The bot api refused the message. Carries the upstream response body.
    #[error("Error sending to Telegram")]
    Rejected(serde_json::Value),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_relay_submission(
        mut self,
        submission: ContactSubmission,
        client_address: ClientAddressInfo,
        result: Result<(), ContactRelayError>,
    ) -> Self {
        self.expect_relay_submission()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(client_address),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
