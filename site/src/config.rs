//! Page configuration object (`window.FAQ_CONFIG`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server serializes a [`SiteConfig`] into the HTML shell as a global
//! object; the hydrated client reads it back. Every key is optional and falls
//! back to the defaults below, so a page served without the global still works.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the global object holding page configuration.
pub const GLOBAL_NAME: &str = "FAQ_CONFIG";
pub const DEFAULT_FAQ_ENDPOINT: &str = "/api/faqs?published=true";
pub const DEFAULT_PAGE_SIZE: u32 = 200;
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/submit-contact";
/// Public reCAPTCHA test key; accepts every challenge.
pub const DEFAULT_CAPTCHA_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "ENDPOINT")]
    pub faq_endpoint: String,
    #[serde(rename = "PAGE_SIZE")]
    pub page_size: u32,
    #[serde(rename = "CONTACT_ENDPOINT")]
    pub contact_endpoint: String,
    #[serde(rename = "CAPTCHA_SITE_KEY")]
    pub captcha_site_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            faq_endpoint: DEFAULT_FAQ_ENDPOINT.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            captcha_site_key: DEFAULT_CAPTCHA_SITE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Build from a loosely-typed configuration object.
    ///
    /// Empty or non-string endpoints fall back to defaults. `PAGE_SIZE` is kept
    /// whenever it is a non-negative integer (including `0`) or a numeric string.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map_or(fallback, str::to_owned)
        };
        let page_size = value
            .get("PAGE_SIZE")
            .and_then(|v| match v {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse::<u64>().ok(),
                _ => None,
            })
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(defaults.page_size);
        Self {
            faq_endpoint: text("ENDPOINT", defaults.faq_endpoint),
            page_size,
            contact_endpoint: text("CONTACT_ENDPOINT", defaults.contact_endpoint),
            captcha_site_key: text("CAPTCHA_SITE_KEY", defaults.captcha_site_key),
        }
    }

    /// Inline `<script>` body assigning this config to the global object.
    ///
    /// `</` is escaped so endpoint strings cannot close the script element.
    #[must_use]
    pub fn to_global_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned());
        format!("window.{GLOBAL_NAME} = {};", json.replace("</", "<\\/"))
    }

    /// Read the global object in the browser; defaults elsewhere.
    #[must_use]
    pub fn from_window() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let raw = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(GLOBAL_NAME))
                .ok()
                .filter(|v| v.is_object())
                .and_then(|v| js_sys::JSON::stringify(&v).ok())
                .and_then(|s| s.as_string());
            match raw.and_then(|s| serde_json::from_str::<Value>(&s).ok()) {
                Some(value) => Self::from_value(&value),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
