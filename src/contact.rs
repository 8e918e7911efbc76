use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the "message sent" banner stays up after a successful submit.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);
pub const MIN_MESSAGE_LEN: usize = 10;
pub const SUBMIT_FAILED_MSG: &str = "Failed to send message. Please try again.";

// local@domain.tld shape only, not RFC 5322
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// The three user-editable inputs, serialized as the relay's form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, msg: &'static str) {
        self.0.insert(field, msg);
    }
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn validate(fields: &ContactFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_email_shaped(&fields.email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, "Message must be at least 10 characters");
    }

    errors
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("couldn't reach contact relay: {0}")]
    Network(String),
    #[error("contact relay rejected the message ({0})")]
    Rejected(StatusCode),
}

/// Why `begin_submit` refused to start a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid,
    InFlight,
}

/// Identifies one success banner so a stale timer can't hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u32);

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: ValidationErrors,
    submit_error: Option<&'static str>,
    in_flight: bool,
    success: Option<SuccessTicket>,
    successes: u32,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn submit_error(&self) -> Option<&'static str> {
        self.submit_error
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn success(&self) -> bool {
        self.success.is_some()
    }

    /// Updates one input. Only that input's error is cleared.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Validates and, when the form is clean and idle, marks it in flight and
    /// hands back the payload to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitBlocked> {
        if self.in_flight {
            return Err(SubmitBlocked::InFlight);
        }
        self.errors = validate(&self.fields);
        self.submit_error = None;
        if !self.errors.is_empty() {
            log::debug!("contact form has {} invalid field(s)", self.errors.len());
            return Err(SubmitBlocked::Invalid);
        }
        self.in_flight = true;
        Ok(self.fields.clone())
    }

    /// Settles the in-flight delivery. A success returns the ticket to pass
    /// to `expire_success` once `SUCCESS_BANNER_TTL` has elapsed.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<SuccessTicket> {
        if !self.in_flight {
            log::warn!("ignoring contact relay outcome with no submission in flight");
            return None;
        }
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.successes = self.successes.wrapping_add(1);
                let ticket = SuccessTicket(self.successes);
                self.success = Some(ticket);
                Some(ticket)
            }
            Err(e) => {
                log::error!("contact form submission error: {e}");
                self.submit_error = Some(SUBMIT_FAILED_MSG);
                None
            }
        }
    }

    pub fn expire_success(&mut self, ticket: SuccessTicket) {
        if self.success == Some(ticket) {
            self.success = None;
        }
    }
}
