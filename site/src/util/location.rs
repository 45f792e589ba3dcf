//! Address fragment (`location.hash`) access for the FAQ accordion.
//!
//! Browser-only; SSR paths read an empty fragment and ignore writes.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use crate::state::faq::FragmentChange;

/// Fragment text without the leading `#`, percent-decoded.
///
/// Browsers report `location.hash` encoded (`#qu%C3%A9-es`) while anchors are
/// raw slugs. Undecodable input is returned as-is.
#[must_use]
pub fn fragment_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

/// Current fragment of the page URL.
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| fragment_from_hash(&h))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Apply a fragment change requested by the accordion state.
pub fn apply(change: &FragmentChange) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match change {
            FragmentChange::Set(key) => {
                let _ = window.location().set_hash(key);
            }
            FragmentChange::Clear => {
                // Must not push a history entry or fire `hashchange`.
                let location = window.location();
                let path = format!(
                    "{}{}",
                    location.pathname().unwrap_or_default(),
                    location.search().unwrap_or_default()
                );
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = change;
    }
}
