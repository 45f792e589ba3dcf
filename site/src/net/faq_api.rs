//! FAQ list loading.
//!
//! One GET per page load through [`fetch_json`]; no retry and no timeout.

#[cfg(test)]
#[path = "faq_api_test.rs"]
mod faq_api_test;

use url::Url;

use super::fetch::{FetchBody, FetchError, FetchInit, fetch_json};
use super::types::FaqEntry;
use crate::config::SiteConfig;
use crate::util::faq_normalize::normalize_payload;

/// Resolve `endpoint` against `origin` and set `limit=<page_size>`.
///
/// An existing `limit` parameter is replaced, other parameters are kept.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] when the origin or endpoint cannot form a URL.
pub fn faq_request_url(endpoint: &str, origin: &str, page_size: u32) -> Result<String, FetchError> {
    let base = Url::parse(origin).map_err(|e| FetchError::InvalidUrl(format!("{origin}: {e}")))?;
    let mut url = base.join(endpoint).map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "limit")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut().clear().extend_pairs(kept).append_pair("limit", &page_size.to_string());
    Ok(url.into())
}

/// Turn a successful response body into published entries.
///
/// Text bodies carry no records and yield an empty list.
#[must_use]
pub fn entries_from_body(body: &FetchBody) -> Vec<FaqEntry> {
    match body {
        FetchBody::Json(value) => normalize_payload(value),
        FetchBody::Text(_) => Vec::new(),
    }
}

/// Fetch and normalize the FAQ list described by `config`.
///
/// # Errors
///
/// Propagates any [`FetchError`] from URL building or the request itself.
pub async fn load_faqs(config: &SiteConfig) -> Result<Vec<FaqEntry>, FetchError> {
    let origin = page_origin();
    let url = faq_request_url(&config.faq_endpoint, &origin, config.page_size)?;
    let body = fetch_json(&url, FetchInit::get().header("Accept", "application/json")).await?;
    Ok(entries_from_body(&body))
}

fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "http://localhost".to_owned()
    }
}
