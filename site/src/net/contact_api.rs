//! Contact form submission.
//!
//! ERROR HANDLING
//! ==============
//! [`SubmitError::user_message`] collapses every failure into the one line the
//! form shows: the server's own detail when it sent one, the CAPTCHA hint, or
//! a generic retry message for transport problems.

#[cfg(test)]
#[path = "contact_api_test.rs"]
mod contact_api_test;

use super::fetch::{FetchError, FetchInit, RequestBody, api_url, fetch_json};
use crate::state::contact::GENERIC_FAILURE_MESSAGE;
use crate::util::captcha::{self, CaptchaError, RESPONSE_FIELD};
use crate::util::validate::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Captcha(#[from] CaptchaError),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(FetchError),
}

impl From<FetchError> for SubmitError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status, detail, .. } => {
                if detail.is_empty() {
                    Self::Rejected(format!("Error HTTP {status}"))
                } else {
                    Self::Rejected(detail)
                }
            }
            other => Self::Transport(other),
        }
    }
}

impl SubmitError {
    /// Single line shown in the form error box.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Captcha(e) => e.to_string(),
            Self::Rejected(detail) => detail.clone(),
            Self::Transport(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Multipart fields for one submission, CAPTCHA token last.
#[must_use]
pub fn contact_form_fields(submission: &ContactSubmission, captcha_token: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> =
        submission.form_fields().into_iter().map(|(k, v)| (k.to_owned(), v)).collect();
    fields.push((RESPONSE_FIELD.to_owned(), captcha_token.to_owned()));
    fields
}

/// POST the sanitized submission to `endpoint`.
///
/// # Errors
///
/// Fails before any request when the CAPTCHA is unavailable or unsolved;
/// otherwise reports the server detail or a transport failure.
pub async fn submit_contact(endpoint: &str, submission: &ContactSubmission) -> Result<(), SubmitError> {
    let token = captcha::current_token()?;
    let init = FetchInit::post(RequestBody::Form(contact_form_fields(submission, &token)))
        .header("Accept", "application/json");
    fetch_json(&api_url(endpoint), init).await?;
    Ok(())
}
