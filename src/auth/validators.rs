//! Validators for authentication requests

use super::models::{LoginRequest, RegisterRequest};
use crate::common::validation::{check_email, check_password_strength, MAX_NAME_LEN};
use crate::common::{ValidationResult, Validator};

pub struct RegisterValidator;

impl Validator<RegisterRequest> for RegisterValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_email(&mut result, "email", &data.email);
        check_password_strength(&mut result, "password", &data.password);

        if let Some(name) = &data.name {
            if name.chars().count() > MAX_NAME_LEN {
                result.add_error("name", "Name must be at most 100 characters");
            }
        }

        result
    }
}

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        }
        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}
