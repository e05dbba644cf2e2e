use super::*;

fn filled() -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set_value("name", "Ada");
    form.set_value("email", "ada@example.com");
    form.set_value("message", "Hello there");
    form
}

// =============================================================
// Email format
// =============================================================

#[test]
fn is_valid_email_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(is_valid_email("a@b"));
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    assert!(!is_valid_email("ada"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("ada@example..com"));
    assert!(!is_valid_email("ada@-example.com"));
    assert!(!is_valid_email("ada smith@example.com"));
}

#[test]
fn email_field_ignores_surrounding_whitespace() {
    let mut field = FormField::new("email", "Email", FieldKind::Email, true);
    field.value = "  ada@example.com \n".to_owned();
    assert!(field.is_valid());
    assert_eq!(field.submitted_value(), "ada@example.com");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn prepare_with_empty_required_field_shows_generic_message() {
    let mut form = filled();
    form.set_value("message", "");

    let result = form.prepare();

    assert_eq!(
        result,
        Err(Attempt::Invalid {
            failure: ValidationFailure::RequiredFields,
            focus: Some("message".to_owned()),
        })
    );
    assert_eq!(form.status.message(), MSG_REQUIRED_FIELDS);
    assert_eq!(form.status.css_class(), None);
    assert!(form.show_errors);
    assert!(!form.sending);
}

#[test]
fn prepare_with_malformed_email_shows_email_message() {
    let mut form = filled();
    form.set_value("email", "not-an-address");

    let result = form.prepare();

    assert_eq!(
        result,
        Err(Attempt::Invalid {
            failure: ValidationFailure::InvalidEmail,
            focus: Some("email".to_owned()),
        })
    );
    assert_eq!(form.status.message(), MSG_INVALID_EMAIL);
}

#[test]
fn empty_email_counts_as_missing_not_malformed() {
    let mut form = filled();
    form.set_value("email", "");
    assert_eq!(
        form.validate(),
        Err((ValidationFailure::RequiredFields, Some("email".to_owned())))
    );
}

#[test]
fn malformed_email_takes_precedence_over_earlier_missing_field() {
    let mut form = filled();
    form.set_value("name", "");
    form.set_value("email", "ada@");

    assert_eq!(
        form.validate(),
        Err((ValidationFailure::InvalidEmail, Some("name".to_owned())))
    );
}

#[test]
fn optional_empty_field_is_valid() {
    let mut form = ContactFormState::new(vec![
        FormField::new("email", "Email", FieldKind::Email, true),
        FormField::new("attachment", "Attachment", FieldKind::File, false),
    ]);
    form.set_value("email", "ada@example.com");
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn required_file_field_without_selection_is_missing() {
    let mut form = ContactFormState::new(vec![
        FormField::new("email", "Email", FieldKind::Email, true),
        FormField::new("resume", "Resume", FieldKind::File, true),
    ]);
    form.set_value("email", "ada@example.com");

    assert_eq!(
        form.prepare(),
        Err(Attempt::Invalid {
            failure: ValidationFailure::RequiredFields,
            focus: Some("resume".to_owned()),
        })
    );
    assert_eq!(form.status.message(), MSG_REQUIRED_FIELDS);

    form.set_value("resume", "C:\\fakepath\\resume.pdf");

    let payload = form.prepare().expect("file selected");
    assert_eq!(payload.get("resume"), Some("C:\\fakepath\\resume.pdf"));
}

// =============================================================
// Sending and settling
// =============================================================

#[test]
fn prepare_valid_form_enters_sending_and_disables_button() {
    let mut form = filled();

    let payload = form.prepare().expect("valid form");

    assert!(form.sending);
    assert_eq!(form.status, SubmissionStatus::Sending);
    assert_eq!(form.button_label(), BUTTON_SENDING);
    assert_eq!(payload.get("name"), Some("Ada"));
    assert_eq!(payload.get("email"), Some("ada@example.com"));
    assert_eq!(payload.get("message"), Some("Hello there"));
}

#[test]
fn prepare_while_sending_is_refused() {
    let mut form = filled();
    let _ = form.prepare();
    assert_eq!(form.prepare(), Err(Attempt::Busy));
    assert_eq!(form.status, SubmissionStatus::Sending);
}

#[test]
fn complete_success_resets_fields_and_clears_error_display() {
    let mut form = filled();
    form.show_errors = true;
    let _ = form.prepare();

    let attempt = form.complete(Ok(()));

    assert_eq!(attempt, Attempt::Sent);
    assert_eq!(form.status.message(), MSG_SUCCESS);
    assert_eq!(form.status.css_class(), Some("success"));
    assert!(form.fields.iter().all(|f| f.value.is_empty()));
    assert!(!form.show_errors);
    assert!(!form.sending);
    assert_eq!(form.button_label(), BUTTON_DEFAULT);
}

#[test]
fn complete_server_error_keeps_field_values() {
    let mut form = filled();
    let _ = form.prepare();

    let attempt = form.complete(Err(SubmitError::Server { status: 500 }));

    assert_eq!(attempt, Attempt::ServerError);
    assert_eq!(form.status.message(), MSG_SERVER_ERROR);
    assert_eq!(form.status.css_class(), Some("error"));
    assert_eq!(form.value("email"), "ada@example.com");
    assert!(!form.sending);
}

#[test]
fn complete_transport_error_keeps_field_values() {
    let mut form = filled();
    let _ = form.prepare();

    let attempt = form.complete(Err(SubmitError::Transport("offline".to_owned())));

    assert_eq!(attempt, Attempt::NetworkError);
    assert_eq!(form.status.message(), MSG_NETWORK_ERROR);
    assert_eq!(form.status.css_class(), Some("error"));
    assert_eq!(form.value("message"), "Hello there");
    assert_eq!(form.button_label(), BUTTON_DEFAULT);
}

#[test]
fn reset_restores_non_empty_defaults() {
    let mut field = FormField::new("subject", "Subject", FieldKind::Text, false);
    field.default_value = "Hello".to_owned();
    let mut form = ContactFormState::new(vec![field]);
    form.set_value("subject", "Changed");
    let _ = form.prepare();
    let _ = form.complete(Ok(()));
    assert_eq!(form.value("subject"), "Hello");
}

#[test]
fn new_attempt_clears_previous_status_before_validating() {
    let mut form = filled();
    let _ = form.prepare();
    let _ = form.complete(Err(SubmitError::Server { status: 503 }));
    assert_eq!(form.status.css_class(), Some("error"));

    let _ = form.prepare();

    assert_eq!(form.status, SubmissionStatus::Sending);
    assert_eq!(form.status.message(), "");
    assert_eq!(form.status.css_class(), None);
}

#[test]
fn idle_status_has_no_text_or_class() {
    let status = SubmissionStatus::default();
    assert_eq!(status, SubmissionStatus::Idle);
    assert_eq!(status.message(), "");
    assert_eq!(status.css_class(), None);
}
