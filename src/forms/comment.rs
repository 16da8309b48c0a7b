//! Comment form on the trip details page

use serde::{Deserialize, Serialize};

use crate::forms::validation::{check_length, check_required, LengthRule, ValidationErrors};

const USERNAME_RULE: LengthRule = LengthRule::new(
    2,
    50,
    "Your name must be at least 2 characters",
    "Your name must not be longer than 50 characters",
);
const TEXT_RULE: LengthRule = LengthRule::new(
    3,
    255,
    "Comment must be at least 3 characters",
    "Comment must not be longer than 255 characters",
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    pub username: String,
    pub text: String,
}

impl CommentForm {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if check_required(&mut errors, "username", &self.username) {
            check_length(&mut errors, "username", &self.username, USERNAME_RULE);
        }
        if check_required(&mut errors, "comment", &self.text) {
            check_length(&mut errors, "comment", &self.text, TEXT_RULE);
        }
        errors.into_result()
    }

    /// Clear both fields after a successful post
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
