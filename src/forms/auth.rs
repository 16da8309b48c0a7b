//! Login and registration forms

use serde::{Deserialize, Serialize};

use crate::forms::validation::{
    check_email, check_length, check_phone, check_required, LengthRule, ValidationErrorKind,
    ValidationErrors,
};
use crate::models::RegisterRequest;

const NAME_RULE: LengthRule = LengthRule::new(2, 50, "Too short", "Too long");
const PASSWORD_RULE: LengthRule = LengthRule::at_least(8, "Password must be at least 8 characters");

/// Country code prepended to the ten-digit phone number on registration
pub const PHONE_COUNTRY_CODE: &str = "+1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if check_required(&mut errors, "email", &self.email) {
            check_email(&mut errors, "email", &self.email);
        }
        check_required(&mut errors, "password", &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Ten digits, without country code
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if check_required(&mut errors, field, value) {
                check_length(&mut errors, field, value, NAME_RULE);
            }
        }
        if check_required(&mut errors, "email", &self.email) {
            check_email(&mut errors, "email", &self.email);
        }
        if check_required(&mut errors, "phone", &self.phone) {
            check_phone(&mut errors, "phone", &self.phone);
        }
        if check_required(&mut errors, "password", &self.password) {
            check_length(&mut errors, "password", &self.password, PASSWORD_RULE);
        }
        if check_required(&mut errors, "confirm_password", &self.confirm_password)
            && self.confirm_password != self.password
        {
            errors.push("confirm_password", ValidationErrorKind::Mismatch, "Passwords must match");
        }

        errors.into_result()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: format!("{}{}", PHONE_COUNTRY_CODE, self.phone),
            password: self.password.clone(),
        }
    }
}
