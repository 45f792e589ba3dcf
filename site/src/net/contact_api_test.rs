use super::*;
use crate::net::fetch::status_error;
use crate::util::validate::{ContactFields, ContactInput};

fn submission() -> ContactSubmission {
    let fields = ContactFields {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: String::new(),
        subject: "Hola".to_owned(),
        message: "Mensaje de prueba.".to_owned(),
        accepted_terms: true,
        honeypot: String::new(),
    };
    ContactSubmission::sanitized(&ContactInput::normalize(&fields))
}

#[test]
fn contact_form_fields_append_captcha_token() {
    let fields = contact_form_fields(&submission(), "tok");
    let names: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["name", "email", "phone", "subject", "message", "terms", "g-recaptcha-response"]);
    assert_eq!(fields.last().map(|(_, v)| v.as_str()), Some("tok"));
}

#[test]
fn status_errors_surface_server_detail() {
    let err = SubmitError::from(status_error(400, "Bad Request", "application/json", r#"{"detail":"reCAPTCHA inválido"}"#));
    assert_eq!(err.user_message(), "reCAPTCHA inválido");

    let err = SubmitError::from(status_error(502, "Bad Gateway", "text/plain", "Guardar en CMS falló"));
    assert_eq!(err.user_message(), "Guardar en CMS falló");
}

#[test]
fn status_error_without_body_mentions_status() {
    let err = SubmitError::from(status_error(500, "Internal Server Error", "text/plain", ""));
    assert_eq!(err.user_message(), "Error HTTP 500");
}

#[test]
fn transport_failures_use_generic_message() {
    let err = SubmitError::from(FetchError::Network("offline".to_owned()));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    let err = SubmitError::from(FetchError::Decode("eof".to_owned()));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn captcha_errors_explain_next_step() {
    let err = SubmitError::from(CaptchaError::Incomplete);
    assert_eq!(err.user_message(), "Completa el CAPTCHA antes de enviar.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_without_widget_fails_before_request() {
    let result = block_on(submit_contact("/submit-contact", &submission()));
    assert!(matches!(result, Err(SubmitError::Captcha(CaptchaError::Unavailable))));
}

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
