use std::{future::Future, sync::LazyLock};

use anyhow::Context;
use folio_models::contact::{ContactSubmission, CONTACT_ENDPOINT};
use folio_utils::folio_version;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::form::FALLBACK_ERROR_MESSAGE;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Post the submission to the contact endpoint.
    fn send_submission(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The endpoint answered with an error status.
    #[error("{}", .message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Rejected { status: u16, message: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ContactApiError {
    /// The message to show next to the form.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApi {
    pub fn with_send_submission(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactApiError>,
    ) -> Self {
        self.expect_send_submission()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = folio_version();

    format!("Folio Client ({repository}, Version {version})")
});

/// Sends submissions to a folio server over http.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    url: Url,
}

impl HttpContactApi {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let url = base_url
            .join(CONTACT_ENDPOINT)
            .context("Failed to build contact endpoint url")?;
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_agent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

impl<'a> From<&'a ContactSubmission> for ContactRequest<'a> {
    fn from(value: &'a ContactSubmission) -> Self {
        Self {
            name: &value.name,
            email: &value.email,
            subject: &value.subject,
            message: &value.message,
            user_agent: value.browser.user_agent.as_deref(),
            platform: value.browser.platform.as_deref(),
            vendor: value.browser.vendor.as_deref(),
            language: value.browser.language.as_deref(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

impl ContactApi for HttpContactApi {
    async fn send_submission(&self, submission: ContactSubmission) -> Result<(), ContactApiError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&ContactRequest::from(&submission))
            .send()
            .await
            .context("Failed to send contact submission")?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "contact submission accepted");
            return Ok(());
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|x| x.error);

        Err(ContactApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
