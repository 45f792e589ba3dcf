//! Contact form normalization and validation rules.
//!
//! DESIGN
//! ======
//! Every rule runs independently and contributes at most one [`Problem`], so
//! the user sees all violations from a single submit attempt. The email
//! pattern is intentionally loose (it accepts consecutive dots, for example);
//! tightening it could reject addresses current users already rely on.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use super::sanitize::{escape_html, trim_and_collapse, truncate_chars};

/// Longest message body forwarded to the contact endpoint, in characters.
pub const MESSAGE_MAX_CHARS: usize = 2000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("static email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+0-9\s\-()]{7,20}$").expect("static phone pattern"));

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub accepted_terms: bool,
    /// Hidden `empresa` field; humans never fill it.
    pub honeypot: String,
}

/// Normalized form values ready for validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub accepted_terms: bool,
}

impl ContactInput {
    /// Trim/collapse single-line fields, lowercase the email, trim the message.
    #[must_use]
    pub fn normalize(fields: &ContactFields) -> Self {
        Self {
            name: trim_and_collapse(&fields.name),
            email: trim_and_collapse(&fields.email.to_lowercase()),
            phone: trim_and_collapse(&fields.phone),
            subject: trim_and_collapse(&fields.subject),
            message: fields.message.trim().to_owned(),
            accepted_terms: fields.accepted_terms,
        }
    }
}

/// A single violated rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    NameTooShort,
    InvalidEmail,
    InvalidPhone,
    SubjectTooShort,
    MessageTooShort,
    TermsNotAccepted,
}

impl Problem {
    /// User-facing message shown in the form error box.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NameTooShort => "• El nombre es demasiado corto.",
            Self::InvalidEmail => "• El correo no es válido.",
            Self::InvalidPhone => "• El teléfono contiene caracteres no permitidos.",
            Self::SubjectTooShort => "• El asunto es demasiado corto.",
            Self::MessageTooShort => "• El mensaje es demasiado corto.",
            Self::TermsNotAccepted => "• Debes aceptar los términos.",
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Run every rule and collect all problems, in display order.
#[must_use]
pub fn validate(input: &ContactInput) -> Vec<Problem> {
    let mut problems = Vec::new();
    if input.name.chars().count() < 2 {
        problems.push(Problem::NameTooShort);
    }
    if !is_valid_email(&input.email) {
        problems.push(Problem::InvalidEmail);
    }
    if !input.phone.is_empty() && !is_valid_phone(&input.phone) {
        problems.push(Problem::InvalidPhone);
    }
    if input.subject.chars().count() < 3 {
        problems.push(Problem::SubjectTooShort);
    }
    if input.message.chars().count() < 10 {
        problems.push(Problem::MessageTooShort);
    }
    if !input.accepted_terms {
        problems.push(Problem::TermsNotAccepted);
    }
    problems
}

/// Join problem messages for the single error box.
#[must_use]
pub fn problems_text(problems: &[Problem]) -> String {
    problems.iter().map(|p| p.message()).collect::<Vec<_>>().join(" ")
}

/// Escaped field set sent to the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub accepted_terms: bool,
}

impl ContactSubmission {
    /// Escape every text field; the message is cut to [`MESSAGE_MAX_CHARS`] first.
    #[must_use]
    pub fn sanitized(input: &ContactInput) -> Self {
        Self {
            name: escape_html(&input.name),
            email: escape_html(&input.email),
            phone: escape_html(&input.phone),
            subject: escape_html(&input.subject),
            message: escape_html(truncate_chars(&input.message, MESSAGE_MAX_CHARS)),
            accepted_terms: input.accepted_terms,
        }
    }

    /// Multipart field list, excluding the CAPTCHA token.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
            ("terms", if self.accepted_terms { "on" } else { "" }.to_owned()),
        ]
    }
}
