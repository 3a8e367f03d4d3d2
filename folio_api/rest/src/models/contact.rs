use folio_models::contact::{
    BrowserInfo, ContactEmail, ContactMessage, ContactName, ContactSubject, ContactSubmission,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    /// Full name of the sender
    pub name: ContactName,
    /// Email address of the sender
    pub email: ContactEmail,
    /// Subject of the message
    pub subject: ContactSubject,
    /// Content of the message
    pub message: ContactMessage,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        let present = |x: Option<String>| x.filter(|x| !x.trim().is_empty());
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
            browser: BrowserInfo {
                user_agent: present(value.user_agent),
                platform: present(value.platform),
                vendor: present(value.vendor),
                language: present(value.language),
            },
        }
    }
}
