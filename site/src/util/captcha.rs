//! Bridge to the reCAPTCHA widget global (`grecaptcha`).
//!
//! Requires a browser environment; SSR and native tests see the widget as
//! unavailable.

#[cfg(test)]
#[path = "captcha_test.rs"]
mod captcha_test;

/// Form field carrying the widget response token.
pub const RESPONSE_FIELD: &str = "g-recaptcha-response";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptchaError {
    #[error("El CAPTCHA no está disponible. Recarga la página e inténtalo de nuevo.")]
    Unavailable,
    #[error("Completa el CAPTCHA antes de enviar.")]
    Incomplete,
}

/// Classify a raw widget response: no widget, empty token, or a token.
///
/// # Errors
///
/// [`CaptchaError::Unavailable`] for `None`, [`CaptchaError::Incomplete`] for
/// a blank token.
pub fn token_from_response(raw: Option<String>) -> Result<String, CaptchaError> {
    let token = raw.ok_or(CaptchaError::Unavailable)?;
    if token.trim().is_empty() {
        return Err(CaptchaError::Incomplete);
    }
    Ok(token)
}

/// Current widget token.
///
/// # Errors
///
/// See [`token_from_response`].
pub fn current_token() -> Result<String, CaptchaError> {
    #[cfg(feature = "hydrate")]
    {
        token_from_response(call_widget("getResponse").map(|v| v.as_string().unwrap_or_default()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        token_from_response(None)
    }
}

/// Reset the widget after a successful submission.
pub fn reset() {
    #[cfg(feature = "hydrate")]
    {
        let _ = call_widget("reset");
    }
}

#[cfg(feature = "hydrate")]
fn call_widget(method: &str) -> Option<wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let widget = js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha")).ok()?;
    if widget.is_undefined() || widget.is_null() {
        return None;
    }
    let func = js_sys::Reflect::get(&widget, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    func.call0(&widget).ok()
}
