//! Field validation primitives shared by all forms
//!
//! Forms hold raw input strings; an empty string counts as "not given".
//! Every rule appends to a [`ValidationErrors`] collection so that all
//! problems are reported together.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    Missing,
    TooShort,
    TooLong,
    InvalidFormat,
    NotFuture,
    BeforeDeparture,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `participants.0.phone`
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, kind: ValidationErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First error recorded for `field`
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn kind_of(&self, field: &str) -> Option<ValidationErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Length limits for a text field, with the messages shown when violated
#[derive(Debug, Clone, Copy)]
pub struct LengthRule {
    pub min: usize,
    pub max: Option<usize>,
    pub too_short: &'static str,
    pub too_long: &'static str,
}

impl LengthRule {
    pub const fn new(min: usize, max: usize, too_short: &'static str, too_long: &'static str) -> Self {
        Self { min, max: Some(max), too_short, too_long }
    }

    pub const fn at_least(min: usize, too_short: &'static str) -> Self {
        Self { min, max: None, too_short, too_long: "" }
    }
}

pub const REQUIRED_MESSAGE: &str = "Required";

/// Record `Missing` for an empty value. Returns whether a value was given.
pub fn check_required(errors: &mut ValidationErrors, field: &str, value: &str) -> bool {
    if value.is_empty() {
        errors.push(field, ValidationErrorKind::Missing, REQUIRED_MESSAGE);
        false
    } else {
        true
    }
}

/// Length check for a value that was given; empty values are skipped
pub fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, rule: LengthRule) {
    if value.is_empty() {
        return;
    }

    let length = value.chars().count();
    if length < rule.min {
        errors.push(field, ValidationErrorKind::TooShort, rule.too_short);
    } else if rule.max.is_some_and(|max| length > max) {
        errors.push(field, ValidationErrorKind::TooLong, rule.too_long);
    }
}

/// Email format check; empty values are skipped
pub fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !value.is_empty() && !is_valid_email(value) {
        errors.push(field, ValidationErrorKind::InvalidFormat, "Invalid email");
    }
}

/// Ten-digit phone check; empty values are skipped
pub fn check_phone(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !value.is_empty() && !is_valid_phone(value) {
        errors.push(field, ValidationErrorKind::InvalidFormat, "Phone number must be 10 digits");
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}
