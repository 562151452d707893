// Common validation types, traits and shared field rules

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NAME_LEN: usize = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9-]+(?:\.[A-Z0-9-]+)*\.[A-Z]{2,}$")
        .expect("email regex is valid")
});
static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("regex is valid"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("regex is valid"));

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Turn a failed result into `ApiError::ValidationError`.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

/// At least 8 characters with one uppercase letter and one digit
pub fn is_strong_password(password: &str) -> bool {
    (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password.len())
        && UPPER_RE.is_match(password)
        && DIGIT_RE.is_match(password)
}

/// Shared email rule; adds an error under `field` when it fails.
pub fn check_email(result: &mut ValidationResult, field: &str, email: &str) {
    if email.trim().is_empty() {
        result.add_error(field, "Email is required");
    } else if !is_valid_email(email.trim()) {
        result.add_error(field, "Email must be a valid address");
    }
}

/// Shared password strength rule.
pub fn check_password_strength(result: &mut ValidationResult, field: &str, password: &str) {
    if password.is_empty() {
        result.add_error(field, "Password is required");
    } else if !is_strong_password(password) {
        result.add_error(
            field,
            "Password must be 8-128 characters and contain an uppercase letter and a digit",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("First.Last+tag@sub.example.org"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn test_password_rule() {
        assert!(is_strong_password("Passw0rdX"));
        assert!(!is_strong_password("Sh0rt"));
        assert!(!is_strong_password("alllowercase1"));
        assert!(!is_strong_password("NoDigitsHere"));
    }

    #[test]
    fn test_into_result_joins_errors() {
        let mut result = ValidationResult::new();
        check_email(&mut result, "email", "");
        check_password_strength(&mut result, "password", "weak");

        match result.into_result() {
            Err(ApiError::ValidationError(msg)) => {
                assert!(msg.contains("email: Email is required"));
                assert!(msg.contains("password: "));
                assert!(msg.contains(", "));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_result_is_ok() {
        assert!(ValidationResult::new().into_result().is_ok());
    }
}
