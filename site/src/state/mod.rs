//! Page state containers held in `RwSignal`s.
//!
//! DESIGN
//! ======
//! State structs are plain data with methods for every transition, so the
//! rules can be unit tested without a reactive runtime.

pub mod contact;
pub mod faq;
