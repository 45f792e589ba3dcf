use serde_json::json;

use super::*;

#[test]
fn from_value_uses_defaults_for_missing_keys() {
    assert_eq!(SiteConfig::from_value(&json!({})), SiteConfig::default());
    assert_eq!(SiteConfig::from_value(&json!(null)), SiteConfig::default());
}

#[test]
fn from_value_overrides_endpoint_and_page_size() {
    let config = SiteConfig::from_value(&json!({ "ENDPOINT": "/faqs.json", "PAGE_SIZE": 25 }));
    assert_eq!(config.faq_endpoint, "/faqs.json");
    assert_eq!(config.page_size, 25);
    assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
}

#[test]
fn from_value_ignores_empty_endpoint_but_keeps_zero_page_size() {
    let config = SiteConfig::from_value(&json!({ "ENDPOINT": "", "PAGE_SIZE": 0 }));
    assert_eq!(config.faq_endpoint, DEFAULT_FAQ_ENDPOINT);
    assert_eq!(config.page_size, 0);
}

#[test]
fn from_value_accepts_numeric_string_page_size() {
    let config = SiteConfig::from_value(&json!({ "PAGE_SIZE": " 50 " }));
    assert_eq!(config.page_size, 50);
    let config = SiteConfig::from_value(&json!({ "PAGE_SIZE": -3 }));
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn global_script_round_trips_through_from_value() {
    let config = SiteConfig {
        faq_endpoint: "/api/faqs?published=true&lang=es".to_owned(),
        page_size: 10,
        ..SiteConfig::default()
    };
    let script = config.to_global_script();
    assert!(script.starts_with("window.FAQ_CONFIG = {"));
    let json = script.trim_start_matches("window.FAQ_CONFIG = ").trim_end_matches(';');
    let value: Value = serde_json::from_str(json).expect("valid json");
    assert_eq!(SiteConfig::from_value(&value), config);
}

#[test]
fn global_script_cannot_close_script_element() {
    let config = SiteConfig { faq_endpoint: "/x</script><script>alert(1)".to_owned(), ..SiteConfig::default() };
    assert!(!config.to_global_script().contains("</script>"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_window_is_default_outside_browser() {
    assert_eq!(SiteConfig::from_window(), SiteConfig::default());
}
