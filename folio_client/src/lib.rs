//! Client side of the contact form.

pub use api::{ContactApi, ContactApiError, HttpContactApi};
pub use environment::ClientEnvironment;
pub use form::{ContactForm, SubmissionStatus, SubmitError, FALLBACK_ERROR_MESSAGE, RESET_DELAY};
pub use validation::{ContactField, ContactFields, FieldError, ValidationErrors};

#[cfg(any(test, feature = "mock"))]
pub use api::MockContactApi;

mod api;
mod environment;
mod form;
mod validation;
