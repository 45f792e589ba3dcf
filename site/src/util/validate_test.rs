use super::*;

fn valid_fields() -> ContactFields {
    ContactFields {
        name: "Ana María".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: String::new(),
        subject: "Cotización".to_owned(),
        message: "Necesito información del servicio.".to_owned(),
        accepted_terms: true,
        honeypot: String::new(),
    }
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_collapses_single_line_fields_and_lowercases_email() {
    let fields = ContactFields {
        name: "  Ana   María ".to_owned(),
        email: "  ANA@Example.COM ".to_owned(),
        phone: " +57  300 ".to_owned(),
        subject: " Hola\t mundo ".to_owned(),
        message: "  línea uno\n\n  línea dos  ".to_owned(),
        ..valid_fields()
    };
    let input = ContactInput::normalize(&fields);
    assert_eq!(input.name, "Ana María");
    assert_eq!(input.email, "ana@example.com");
    assert_eq!(input.phone, "+57 300");
    assert_eq!(input.subject, "Hola mundo");
    assert_eq!(input.message, "línea uno\n\n  línea dos");
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_complete_input() {
    let input = ContactInput::normalize(&valid_fields());
    assert!(validate(&input).is_empty());
}

#[test]
fn validate_reports_every_violation_at_once() {
    let fields = ContactFields {
        name: "A".to_owned(),
        email: "nope".to_owned(),
        phone: "abc".to_owned(),
        subject: "Hi".to_owned(),
        message: "corto".to_owned(),
        accepted_terms: false,
        honeypot: String::new(),
    };
    let problems = validate(&ContactInput::normalize(&fields));
    assert_eq!(
        problems,
        vec![
            Problem::NameTooShort,
            Problem::InvalidEmail,
            Problem::InvalidPhone,
            Problem::SubjectTooShort,
            Problem::MessageTooShort,
            Problem::TermsNotAccepted,
        ]
    );
}

#[test]
fn validate_skips_phone_rule_when_empty() {
    let fields = ContactFields { phone: "   ".to_owned(), ..valid_fields() };
    assert!(validate(&ContactInput::normalize(&fields)).is_empty());
}

#[test]
fn validate_counts_characters_for_lengths() {
    let fields = ContactFields { name: "Ñu".to_owned(), ..valid_fields() };
    assert!(validate(&ContactInput::normalize(&fields)).is_empty());
}

#[test]
fn email_pattern_matches_loose_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    // Loose by design: consecutive dots pass.
    assert!(is_valid_email("a..b@example..com"));
    assert!(!is_valid_email("a@b.c"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@@example.com"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn phone_pattern_enforces_charset_and_length() {
    assert!(is_valid_phone("+57 (300) 123-4567"));
    assert!(is_valid_phone("1234567"));
    assert!(!is_valid_phone("123456"));
    assert!(!is_valid_phone("123456789012345678901"));
    assert!(!is_valid_phone("300-ABC-1234"));
}

#[test]
fn problems_text_joins_with_spaces() {
    let text = problems_text(&[Problem::NameTooShort, Problem::TermsNotAccepted]);
    assert_eq!(text, "• El nombre es demasiado corto. • Debes aceptar los términos.");
    assert_eq!(problems_text(&[]), "");
}

// =============================================================
// ContactSubmission
// =============================================================

#[test]
fn sanitized_escapes_all_text_fields() {
    let fields = ContactFields {
        name: "<b>Ana</b>".to_owned(),
        subject: "Q&A".to_owned(),
        message: "Hola \"equipo\", ¿qué tal? 1/2".to_owned(),
        ..valid_fields()
    };
    let submission = ContactSubmission::sanitized(&ContactInput::normalize(&fields));
    assert_eq!(submission.name, "&lt;b&gt;Ana&lt;&#x2F;b&gt;");
    assert_eq!(submission.subject, "Q&amp;A");
    assert_eq!(submission.message, "Hola &quot;equipo&quot;, ¿qué tal? 1&#x2F;2");
}

#[test]
fn sanitized_truncates_long_messages_to_limit() {
    let fields = ContactFields { message: "m".repeat(2500), ..valid_fields() };
    let submission = ContactSubmission::sanitized(&ContactInput::normalize(&fields));
    assert_eq!(submission.message.chars().count(), MESSAGE_MAX_CHARS);
}

#[test]
fn form_fields_encode_terms_flag() {
    let submission = ContactSubmission::sanitized(&ContactInput::normalize(&valid_fields()));
    let fields = submission.form_fields();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[5], ("terms", "on".to_owned()));
    assert_eq!(fields[0], ("name", "Ana María".to_owned()));
}
