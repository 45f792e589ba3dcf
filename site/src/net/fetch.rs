//! JSON fetch wrapper with CSRF header injection.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the CSRF token
//! read from the `csrftoken` cookie on mutating requests.
//! Server-side (SSR): requests are not available and return
//! [`FetchError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`FetchError::Status`] carrying the server's
//! detail text, so callers can show either the full `HTTP ...` message or just
//! the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix for API paths. Empty means same origin as the page.
pub const API_BASE: &str = "";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("{message}")]
    Status { status: u16, detail: String, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Methods that change server state and therefore need a CSRF token.
    #[must_use]
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// Sent as `multipart/form-data`.
    Form(Vec<(String, String)>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchInit {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl FetchInit {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(body: RequestBody) -> Self {
        Self { method: Method::Post, headers: Vec::new(), body: Some(body) }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

/// Successful response payload.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchBody {
    Json(Value),
    Text(String),
}

/// Session placeholder; no page resolves one yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
}

/// Resolve the current front-end session. Always `None` for now.
pub async fn resolve_session() -> Option<Session> {
    None
}

/// Prefix a path with [`API_BASE`].
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Read one cookie from a `document.cookie` string, percent-decoded.
#[must_use]
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    let raw = cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|row| row.strip_prefix(name)?.strip_prefix('='))?;
    let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned);
    Some(decoded)
}

/// Attach the CSRF header for mutating requests unless the caller set it.
#[must_use]
pub fn with_csrf(mut init: FetchInit, cookies: Option<&str>) -> FetchInit {
    if !init.method.is_mutating() || init.has_header(CSRF_HEADER) {
        return init;
    }
    if let Some(token) = cookies.and_then(|c| read_cookie(c, CSRF_COOKIE)) {
        init.headers.push((CSRF_HEADER.to_owned(), token));
    }
    init
}

fn is_json(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("application/json")
}

/// Human-readable detail from an error body.
///
/// JSON bodies prefer `detail`, then `message`, then the whole document;
/// anything else is the trimmed text.
#[must_use]
pub fn error_detail(content_type: &str, body: &str) -> String {
    if !is_json(content_type) {
        return body.trim().to_owned();
    }
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };
    for key in ["detail", "message"] {
        match json.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Null | Value::String(_)) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    json.to_string()
}

/// `HTTP <status> <statusText> — <detail>`, without dangling separators.
#[must_use]
pub fn http_error_message(status: u16, status_text: &str, detail: &str) -> String {
    let head = format!("HTTP {status} {status_text}");
    let head = head.trim_end();
    if detail.is_empty() { head.to_owned() } else { format!("{head} — {detail}") }
}

/// Build the error for a non-2xx response.
#[must_use]
pub fn status_error(status: u16, status_text: &str, content_type: &str, body: &str) -> FetchError {
    let detail = error_detail(content_type, body);
    let message = http_error_message(status, status_text, &detail);
    FetchError::Status { status, detail, message }
}

/// Decode a 2xx body: JSON when the content type says so, text otherwise.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when a JSON content type carries invalid JSON.
pub fn parse_success(content_type: &str, body: &str) -> Result<FetchBody, FetchError> {
    if is_json(content_type) {
        serde_json::from_str(body).map(FetchBody::Json).map_err(|e| FetchError::Decode(e.to_string()))
    } else {
        Ok(FetchBody::Text(body.to_owned()))
    }
}

/// Surface a failed body read as a transport error instead of an empty body.
///
/// # Errors
///
/// Returns [`FetchError::Network`] carrying the read error.
pub fn read_body<E: std::fmt::Display>(read: Result<String, E>) -> Result<String, FetchError> {
    read.map_err(|e| FetchError::Network(format!("reading response body: {e}")))
}

/// Perform a request, returning parsed JSON or text.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-2xx status, or a JSON body
/// that does not parse. Off the browser this always fails with
/// [`FetchError::Unavailable`].
pub async fn fetch_json(url: &str, init: FetchInit) -> Result<FetchBody, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let init = with_csrf(init, browser_cookies().as_deref());
        let resp = build_request(url, init)?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let content_type = resp.headers().get("content-type").unwrap_or_default();
        let body = read_body(resp.text().await)?;
        if !resp.ok() {
            return Err(status_error(resp.status(), &resp.status_text(), &content_type, &body));
        }
        parse_success(&content_type, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, init);
        Err(FetchError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn browser_cookies() -> Option<String> {
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn build_request(url: &str, init: FetchInit) -> Result<gloo_net::http::Request, FetchError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let method = match init.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(url).method(method);
    for (name, value) in &init.headers {
        builder = builder.header(name, value);
    }
    let request = match init.body {
        None => builder.build(),
        Some(RequestBody::Json(value)) => builder.json(&value),
        Some(RequestBody::Form(fields)) => {
            let form = web_sys::FormData::new().map_err(|e| FetchError::Network(format!("{e:?}")))?;
            for (name, value) in &fields {
                form.append_with_str(name, value)
                    .map_err(|e| FetchError::Network(format!("{e:?}")))?;
            }
            builder.body(form)
        }
    };
    request.map_err(|e| FetchError::Network(e.to_string()))
}
