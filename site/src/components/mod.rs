//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! FAQ components read and write the page's `RwSignal<FaqState>` from context.

pub mod faq_filters;
pub mod faq_item;
