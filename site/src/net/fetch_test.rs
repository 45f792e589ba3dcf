use serde_json::json;

use super::*;

// =============================================================
// Cookies + CSRF
// =============================================================

#[test]
fn read_cookie_finds_named_value() {
    let cookies = "theme=dark; csrftoken=abc123; other=1";
    assert_eq!(read_cookie(cookies, "csrftoken"), Some("abc123".to_owned()));
    assert_eq!(read_cookie(cookies, "missing"), None);
}

#[test]
fn read_cookie_requires_exact_name_and_decodes() {
    let cookies = "xcsrftoken=nope;csrftoken=a%20b%3D";
    assert_eq!(read_cookie(cookies, "csrftoken"), Some("a b=".to_owned()));
}

#[test]
fn with_csrf_adds_header_for_mutating_methods() {
    let init = with_csrf(FetchInit::post(RequestBody::Json(json!({}))), Some("csrftoken=tok"));
    assert_eq!(init.headers, vec![(CSRF_HEADER.to_owned(), "tok".to_owned())]);

    for method in [Method::Put, Method::Patch, Method::Delete] {
        let init = with_csrf(FetchInit { method, ..FetchInit::default() }, Some("csrftoken=tok"));
        assert!(init.has_header(CSRF_HEADER), "{} should carry CSRF", method.as_str());
    }
}

#[test]
fn with_csrf_skips_safe_methods() {
    let init = with_csrf(FetchInit::get(), Some("csrftoken=tok"));
    assert!(init.headers.is_empty());
}

#[test]
fn with_csrf_keeps_caller_supplied_header() {
    let init = FetchInit::post(RequestBody::Form(Vec::new())).header("x-csrftoken", "mine");
    let init = with_csrf(init, Some("csrftoken=cookie"));
    assert_eq!(init.headers, vec![("x-csrftoken".to_owned(), "mine".to_owned())]);
}

#[test]
fn with_csrf_without_cookie_sends_no_header() {
    let init = with_csrf(FetchInit::post(RequestBody::Json(json!(null))), Some("a=b"));
    assert!(!init.has_header(CSRF_HEADER));
    let init = with_csrf(FetchInit::post(RequestBody::Json(json!(null))), None);
    assert!(!init.has_header(CSRF_HEADER));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_detail_prefers_detail_then_message_then_document() {
    assert_eq!(error_detail("application/json", r#"{"detail":"CSRF failed"}"#), "CSRF failed");
    assert_eq!(error_detail("application/json; charset=utf-8", r#"{"message":"nope"}"#), "nope");
    assert_eq!(error_detail("application/json", r#"{"error":1}"#), r#"{"error":1}"#);
    assert_eq!(
        error_detail("application/json", r#"{"detail":[{"msg":"bad"}]}"#),
        r#"[{"msg":"bad"}]"#
    );
}

#[test]
fn error_detail_handles_text_and_broken_json() {
    assert_eq!(error_detail("text/plain", "  Servidor caído \n"), "Servidor caído");
    assert_eq!(error_detail("application/json", "<html>"), "");
}

#[test]
fn status_error_formats_message() {
    let err = status_error(403, "Forbidden", "application/json", r#"{"detail":"CSRF failed"}"#);
    assert_eq!(err.to_string(), "HTTP 403 Forbidden — CSRF failed");
    match err {
        FetchError::Status { status, detail, .. } => {
            assert_eq!(status, 403);
            assert_eq!(detail, "CSRF failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn http_error_message_omits_empty_parts() {
    assert_eq!(http_error_message(500, "Internal Server Error", ""), "HTTP 500 Internal Server Error");
    assert_eq!(http_error_message(502, "", "upstream"), "HTTP 502 — upstream");
}

// =============================================================
// Success bodies
// =============================================================

#[test]
fn parse_success_returns_json_for_json_content_type() {
    let body = parse_success("application/json", r#"[1,2]"#).expect("json");
    assert_eq!(body, FetchBody::Json(json!([1, 2])));
}

#[test]
fn parse_success_returns_text_otherwise() {
    let body = parse_success("text/html", "<p>hola</p>").expect("text");
    assert_eq!(body, FetchBody::Text("<p>hola</p>".to_owned()));
}

#[test]
fn parse_success_rejects_malformed_json() {
    assert!(matches!(parse_success("application/json", "{"), Err(FetchError::Decode(_))));
}

// =============================================================
// Misc
// =============================================================

#[test]
fn api_url_uses_same_origin_base() {
    assert_eq!(api_url("/submit-contact"), "/submit-contact");
}

#[test]
fn session_resolves_to_none() {
    let session = block_on(resolve_session());
    assert_eq!(session, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_json_is_unavailable_off_browser() {
    let result = block_on(fetch_json("/api/faqs", FetchInit::get()));
    assert!(matches!(result, Err(FetchError::Unavailable)));
}

/// Minimal executor for futures that never actually wait.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[test]
fn read_body_passes_text_through() {
    let body = read_body(Ok::<_, String>("ok".to_owned())).unwrap();
    assert_eq!(body, "ok");
}

#[test]
fn read_body_failure_is_a_network_error() {
    let err = read_body(Err::<String, _>("stream aborted")).unwrap_err();
    assert!(matches!(err, FetchError::Network(ref m) if m.contains("stream aborted")));
}
