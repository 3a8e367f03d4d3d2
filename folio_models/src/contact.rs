use crate::macros::nutype_string;

/// Path of the endpoint accepting contact submissions.
pub const CONTACT_ENDPOINT: &str = "/api/send-telegram";

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const SUBJECT_MIN_LENGTH: usize = 5;
pub const SUBJECT_MAX_LENGTH: usize = 100;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 500;

/// A validated contact form submission. Never persisted, lives for the
/// duration of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
    pub browser: BrowserInfo,
}

/// Optional metadata about the environment the submission was sent from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserInfo {
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub vendor: Option<String>,
    pub language: Option<String>,
}

nutype_string!(ContactName(validate(len_char_min = 2, len_char_max = 50)));

nutype_string!(ContactEmail(validate(predicate = is_valid_email)));

/// Address syntax accepted by the contact form: no whitespace and a dotted
/// domain name, the same rule `contact.js` applies in the browser.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(address) = email.parse::<lettre::Address>() else {
        return false;
    };
    let domain = address.domain();
    !domain.starts_with('[') && domain.split('.').filter(|x| !x.is_empty()).count() >= 2
}

nutype_string!(ContactSubject(validate(len_char_min = 5, len_char_max = 100)));

nutype_string!(ContactMessage(validate(len_char_min = 10, len_char_max = 500)));
