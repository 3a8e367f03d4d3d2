use folio_models::contact::{
    BrowserInfo, ContactEmail, ContactEmailError, ContactMessage, ContactMessageError,
    ContactName, ContactNameError, ContactSubject, ContactSubjectError, ContactSubmission,
};
use thiserror::Error;

/// The four text inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Raw, unvalidated values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Checks every field and returns the validated submission, or one error
    /// per field that violates its constraints.
    pub fn validate(&self, browser: BrowserInfo) -> Result<ContactSubmission, ValidationErrors> {
        let mut errors = Vec::new();

        let name = ContactName::try_new(self.name.clone())
            .map_err(|err| errors.push(FieldError::new(ContactField::Name, name_message(err))));
        let email = ContactEmail::try_new(self.email.clone())
            .map_err(|err| errors.push(FieldError::new(ContactField::Email, email_message(err))));
        let subject = ContactSubject::try_new(self.subject.clone()).map_err(|err| {
            errors.push(FieldError::new(ContactField::Subject, subject_message(err)))
        });
        let message = ContactMessage::try_new(self.message.clone()).map_err(|err| {
            errors.push(FieldError::new(ContactField::Message, message_message(err)))
        });

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) => Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
                browser,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn name_message(err: ContactNameError) -> &'static str {
    match err {
        ContactNameError::LenCharMinViolated => "Name must be at least 2 characters.",
        ContactNameError::LenCharMaxViolated => "Name can be maximum 50 characters.",
    }
}

fn email_message(err: ContactEmailError) -> &'static str {
    match err {
        ContactEmailError::PredicateViolated => "Please enter a valid email address.",
    }
}

fn subject_message(err: ContactSubjectError) -> &'static str {
    match err {
        ContactSubjectError::LenCharMinViolated => "Subject must be at least 5 characters.",
        ContactSubjectError::LenCharMaxViolated => "Subject can be maximum 100 characters.",
    }
}

fn message_message(err: ContactMessageError) -> &'static str {
    match err {
        ContactMessageError::LenCharMinViolated => "Message must be at least 10 characters.",
        ContactMessageError::LenCharMaxViolated => "Message can be maximum 500 characters.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: ContactField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Field-level validation failures, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.0.iter().map(|x| x.message).collect::<Vec<_>>().join(" "))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The message shown below the given field, if any.
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|x| x.field == field).map(|x| x.message)
    }
}
