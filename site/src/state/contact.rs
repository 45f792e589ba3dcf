//! Contact form state across one submit attempt.
//!
//! The page keeps this in an `RwSignal`; transitions mirror the submit flow:
//! `begin_submit` → (network) → `succeed` | `fail`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::sanitize::strip_tags;
use crate::util::validate::{ContactFields, ContactInput, ContactSubmission, problems_text, validate};

/// Shown when the request never produced a usable response.
pub const GENERIC_FAILURE_MESSAGE: &str = "No se pudo enviar el mensaje. Inténtalo de nuevo más tarde.";
/// Toast lifetime after a successful submission.
pub const TOAST_DURATION_MS: u32 = 2500;

/// Free-text inputs that get markup stripped on blur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreeTextField {
    Name,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    /// Joined problem or failure text; empty hides the error box.
    pub error_text: String,
    /// Submit control is disabled while true.
    pub submitting: bool,
    pub toast_visible: bool,
    /// Bumped on every success; a dismiss timer only hides its own toast.
    pub toast_generation: u64,
}

impl ContactFormState {
    /// Validate and, when everything passes, lock the form and return the
    /// sanitized payload to send.
    ///
    /// A filled honeypot returns `None` without touching any state.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting || !self.fields.honeypot.is_empty() {
            return None;
        }
        let input = ContactInput::normalize(&self.fields);
        let problems = validate(&input);
        self.error_text = problems_text(&problems);
        if !problems.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(ContactSubmission::sanitized(&input))
    }

    /// Clear the form after the server accepted the message. Returns the
    /// toast generation to hand back to [`Self::dismiss_toast`].
    pub fn succeed(&mut self) -> u64 {
        self.fields = ContactFields::default();
        self.error_text.clear();
        self.submitting = false;
        self.toast_visible = true;
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast_generation
    }

    /// Surface a single failure message and unlock the form.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error_text = message.into();
        self.submitting = false;
    }

    /// Hide the toast shown by `generation`; later toasts stay up.
    pub fn dismiss_toast(&mut self, generation: u64) {
        if generation == self.toast_generation {
            self.toast_visible = false;
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.error_text.is_empty()
    }

    /// Drop `<...>` markup from a free-text field (blur handler).
    pub fn strip_markup(&mut self, field: FreeTextField) {
        let value = match field {
            FreeTextField::Name => &mut self.fields.name,
            FreeTextField::Subject => &mut self.fields.subject,
            FreeTextField::Message => &mut self.fields.message,
        };
        *value = strip_tags(value);
    }
}
