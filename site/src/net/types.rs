//! Records exchanged with the FAQ endpoint.
//!
//! DESIGN
//! ======
//! Remote payloads use several naming schemes (English and Spanish keys), so
//! records are decoded as loose JSON and mapped into [`FaqEntry`] by
//! `util::faq_normalize` rather than through a derived deserializer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One canonical FAQ record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Unique identifier; generated when the source omits it.
    pub id: String,
    /// Human-friendly anchor, preferred over `id` for the address fragment.
    pub slug: Option<String>,
    pub question: String,
    /// Already-sanitized rich text, inserted verbatim.
    pub answer: String,
    pub category: Option<String>,
    /// Raw last-updated timestamp as sent by the server.
    pub updated_at: Option<String>,
    pub published: bool,
}

impl FaqEntry {
    /// Anchor key used for the fragment and element ids: slug, else `faq-<id>`.
    #[must_use]
    pub fn anchor(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => format!("faq-{}", self.id),
        }
    }
}
