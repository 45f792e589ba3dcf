//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text rules (sanitizing, validation, normalization, dates) live next to
//! the thin browser bridges (fragment, CAPTCHA) so pages only orchestrate.

pub mod captcha;
pub mod date;
pub mod faq_normalize;
pub mod location;
pub mod sanitize;
pub mod validate;
