//! Contact form model and submission state machine.
//!
//! DESIGN
//! ======
//! The form is modeled as plain data so the whole validate/send/settle cycle
//! runs on the host in tests. Components mirror `ContactFormState` into the DOM
//! (classes, button label, status text); the browser never owns the truth.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stay client-side. Network outcomes arrive as
//! `Result<(), SubmitError>` and collapse into one of two generic messages.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::SubmitError;

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_REQUIRED_FIELDS: &str = "Please complete all fields.";
pub const MSG_SUCCESS: &str = "✓ Message sent successfully!";
pub const MSG_SERVER_ERROR: &str = "✗ Something went wrong. Please try again or message me on LinkedIn directly.";
pub const MSG_NETWORK_ERROR: &str = "✗ Unable to send message. Please check your connection and try again.";

pub const BUTTON_DEFAULT: &str = "Send message";
pub const BUTTON_SENDING: &str = "Sending...";

/// Name of the field whose format failure gets its own message.
pub const EMAIL_FIELD: &str = "email";

/// Input flavor, mirroring the HTML control the field renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    /// File picker. `value` holds the selected file name, if any.
    File,
}

/// One form control and its constraint attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub default_value: String,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            kind,
            required,
            value: String::new(),
            default_value: String::new(),
        }
    }

    /// Value as the browser would submit it. Email inputs strip surrounding
    /// whitespace during value sanitization.
    pub fn submitted_value(&self) -> &str {
        match self.kind {
            FieldKind::Email => self.value.trim(),
            _ => &self.value,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.required && self.submitted_value().is_empty()
    }

    pub fn has_bad_format(&self) -> bool {
        let value = self.submitted_value();
        self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_missing() && !self.has_bad_format()
    }
}

/// Why a submit attempt was rejected before reaching the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The `email` field holds text that is not an e-mail address.
    InvalidEmail,
    /// Anything else: a required field is empty, or a non-`email` field is malformed.
    RequiredFields,
}

impl ValidationFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidEmail => MSG_INVALID_EMAIL,
            Self::RequiredFields => MSG_REQUIRED_FIELDS,
        }
    }
}

/// Where an attempt currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Invalid(ValidationFailure),
    Sending,
    Success,
    ServerError,
    NetworkError,
}

impl SubmissionStatus {
    /// Text for the status element. Empty while idle or sending.
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle | Self::Sending => "",
            Self::Invalid(failure) => failure.message(),
            Self::Success => MSG_SUCCESS,
            Self::ServerError => MSG_SERVER_ERROR,
            Self::NetworkError => MSG_NETWORK_ERROR,
        }
    }

    /// Extra class for the status element, next to `form-status`.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("success"),
            Self::ServerError | Self::NetworkError => Some("error"),
            Self::Idle | Self::Sending | Self::Invalid(_) => None,
        }
    }
}

/// Result of a single submit attempt, as seen by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Validation failed; `focus` names the first invalid field.
    Invalid { failure: ValidationFailure, focus: Option<String> },
    /// A request is already in flight; nothing was done.
    Busy,
    Sent,
    ServerError,
    NetworkError,
}

/// Field values captured for the POST body, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub entries: Vec<(String, String)>,
}

impl FormPayload {
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Contact form state: field values plus everything the UI reflects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: Vec<FormField>,
    pub status: SubmissionStatus,
    pub show_errors: bool,
    pub sending: bool,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new(vec![
            FormField::new("name", "Name", FieldKind::Text, true),
            FormField::new(EMAIL_FIELD, "Email", FieldKind::Email, true),
            FormField::new("message", "Message", FieldKind::TextArea, true),
        ])
    }
}

impl ContactFormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
            show_errors: false,
            sending: false,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map_or("", |f| f.value.as_str())
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.sending { BUTTON_SENDING } else { BUTTON_DEFAULT }
    }

    /// Run the declarative constraint checks.
    ///
    /// The `email` field's format failure wins over any empty field elsewhere,
    /// but only when it actually holds text.
    ///
    /// # Errors
    ///
    /// Returns the failure kind and the first invalid field in document order.
    pub fn validate(&self) -> Result<(), (ValidationFailure, Option<String>)> {
        let first_invalid = self.fields.iter().find(|f| !f.is_valid());
        let Some(first_invalid) = first_invalid else {
            return Ok(());
        };
        let email_bad = self
            .field(EMAIL_FIELD)
            .is_some_and(FormField::has_bad_format);
        let failure = if email_bad {
            ValidationFailure::InvalidEmail
        } else {
            ValidationFailure::RequiredFields
        };
        Err((failure, Some(first_invalid.name.clone())))
    }

    /// Start an attempt: clear stale status, validate, and enter `Sending`.
    ///
    /// Returns the payload to post, or the `Attempt` to report when no request
    /// should be issued.
    ///
    /// # Errors
    ///
    /// `Attempt::Invalid` when validation fails, `Attempt::Busy` while a
    /// request is already in flight.
    pub fn prepare(&mut self) -> Result<FormPayload, Attempt> {
        if self.sending {
            return Err(Attempt::Busy);
        }
        self.status = SubmissionStatus::Idle;

        if let Err((failure, focus)) = self.validate() {
            self.show_errors = true;
            self.status = SubmissionStatus::Invalid(failure);
            return Err(Attempt::Invalid { failure, focus });
        }

        self.sending = true;
        self.status = SubmissionStatus::Sending;
        Ok(self.payload())
    }

    /// Settle an attempt that reached the network.
    pub fn complete(&mut self, result: Result<(), SubmitError>) -> Attempt {
        let attempt = match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.reset_fields();
                self.show_errors = false;
                Attempt::Sent
            }
            Err(SubmitError::Server { .. }) => {
                self.status = SubmissionStatus::ServerError;
                Attempt::ServerError
            }
            Err(SubmitError::Transport(_)) => {
                self.status = SubmissionStatus::NetworkError;
                Attempt::NetworkError
            }
        };
        self.sending = false;
        attempt
    }

    pub fn payload(&self) -> FormPayload {
        FormPayload {
            entries: self
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.submitted_value().to_owned()))
                .collect(),
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.value.clone_from(&field.default_value);
        }
    }
}

/// Check the HTML "valid e-mail address" production:
/// `local@label(.label)*` with the browser's permitted local-part characters
/// and 1-63 character labels that neither start nor end with `-`.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
