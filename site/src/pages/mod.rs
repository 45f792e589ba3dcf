//! Top-level routed pages.

pub mod contact;
pub mod faq;
