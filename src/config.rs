//! Host server configuration from the process environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides the listen port, every value here ends up in the page
//! configuration object rendered into the HTML shell. Unset or empty
//! variables keep the page defaults; malformed numbers are startup errors.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use site::config::SiteConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `FAQ_PAGE_SIZE` is set but not a non-negative integer.
    #[error("invalid FAQ_PAGE_SIZE: {0:?}")]
    InvalidPageSize(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = SiteConfig::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let page_size = match get("FAQ_PAGE_SIZE") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidPageSize(raw))?,
            None => defaults.page_size,
        };

        Ok(Self {
            port,
            site: SiteConfig {
                faq_endpoint: get("FAQ_ENDPOINT").unwrap_or(defaults.faq_endpoint),
                page_size,
                contact_endpoint: get("CONTACT_ENDPOINT").unwrap_or(defaults.contact_endpoint),
                captcha_site_key: get("RECAPTCHA_SITE_KEY").unwrap_or(defaults.captcha_site_key),
            },
        })
    }
}
