use std::{sync::Arc, time::Duration};

use folio_models::contact::ContactSubmission;
use thiserror::Error;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, warn};

use crate::{
    api::ContactApi,
    environment::ClientEnvironment,
    validation::{ContactField, ContactFields, ValidationErrors},
};

/// Time after which a finished submission returns to [`SubmissionStatus::Idle`].
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while sending the message.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Carries the message shown to the user.
    Error(String),
}

impl SubmissionStatus {
    /// Label of the submit button in this state.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error(_) => "Failed to Send",
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress or was just sent")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    Failed(String),
}

/// State of a single contact form.
///
/// At most one submission is in flight at a time. Finished submissions
/// return to idle after [`RESET_DELAY`], unless the form is dropped first.
#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    environment: ClientEnvironment,
    fields: ContactFields,
    status: Arc<watch::Sender<SubmissionStatus>>,
    reset: Option<ResetTimer>,
}

impl<Api: ContactApi> ContactForm<Api> {
    pub fn new(api: Api, environment: ClientEnvironment) -> Self {
        Self {
            api,
            environment,
            fields: Default::default(),
            status: Arc::new(watch::Sender::new(SubmissionStatus::Idle)),
            reset: None,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Watch status changes, including the automatic reset.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(
            *self.status.borrow(),
            SubmissionStatus::Submitting | SubmissionStatus::Success
        )
    }

    pub fn validate(&self) -> Result<ContactSubmission, ValidationErrors> {
        self.fields.validate(self.environment.clone().into())
    }

    /// Validate the fields and send them.
    ///
    /// Validation errors leave the status untouched and no request is made.
    /// On success the fields are cleared, on failure they are kept.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::Busy);
        }

        let submission = self.validate()?;

        self.reset = None;
        self.status.send_replace(SubmissionStatus::Submitting);

        let result = match self.api.send_submission(submission).await {
            Ok(()) => {
                info!("contact submission sent");
                self.fields = Default::default();
                self.status.send_replace(SubmissionStatus::Success);
                Ok(())
            }
            Err(err) => {
                warn!("failed to send contact submission: {err:#}");
                let message = err.user_message().to_owned();
                self.status
                    .send_replace(SubmissionStatus::Error(message.clone()));
                Err(SubmitError::Failed(message))
            }
        };

        self.reset = Some(ResetTimer::start(Arc::clone(&self.status)));

        result
    }
}

/// Puts the status back to idle once [`RESET_DELAY`] has elapsed. Dropping
/// the timer cancels it.
#[derive(Debug)]
struct ResetTimer(JoinHandle<()>);

impl ResetTimer {
    fn start(status: Arc<watch::Sender<SubmissionStatus>>) -> Self {
        let deadline = tokio::time::Instant::now() + RESET_DELAY;
        Self(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            status.send_replace(SubmissionStatus::Idle);
        }))
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.0.abort();
    }
}
