//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` is the shared JSON/CSRF wrapper; `faq_api` and `contact_api` build
//! on it, and `types` defines the FAQ record schema.

pub mod contact_api;
pub mod faq_api;
pub mod fetch;
pub mod types;
