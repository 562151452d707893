// src/profile/validators.rs

use super::models::*;
use crate::common::validation::{check_email, check_password_strength, MAX_NAME_LEN};
use crate::common::{ValidationResult, Validator};

pub struct ProfileValidator;

impl Validator<UpdateProfileRequest> for ProfileValidator {
    fn validate(&self, data: &UpdateProfileRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.is_none() && data.name.is_none() {
            result.add_error("general", "At least one field must be provided for update");
            return result;
        }

        if let Some(email) = &data.email {
            check_email(&mut result, "email", email);
        }

        if let Some(name) = &data.name {
            if name.trim().chars().count() > MAX_NAME_LEN {
                result.add_error("name", "Name must be at most 100 characters");
            }
        }

        result
    }
}

pub struct PasswordValidator;

impl Validator<ChangePasswordRequest> for PasswordValidator {
    fn validate(&self, data: &ChangePasswordRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.current_password.is_empty() {
            result.add_error("current_password", "Current password is required");
        }

        check_password_strength(&mut result, "new_password", &data.new_password);

        if data.new_password != data.new_password_confirmation {
            result.add_error(
                "new_password_confirmation",
                "Password confirmation does not match",
            );
        }

        if !data.current_password.is_empty() && data.new_password == data.current_password {
            result.add_error(
                "new_password",
                "New password must differ from the current password",
            );
        }

        result
    }
}
