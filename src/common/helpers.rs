// Helper functions for safe logging

use serde_json::Value;

/// Keys whose values never reach the logs.
const REDACTED_KEYS: &[&str] = &["password", "token", "authorization", "secret"];

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 && !parts[0].is_empty() {
            let first: String = parts[0].chars().take(1).collect();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 && token.is_ascii() {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Replaces the value of every credential-like key in a JSON document,
/// at any depth, with `"[REDACTED]"`.
pub fn redact_json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                let lowered = key.to_lowercase();
                if REDACTED_KEYS.iter().any(|k| lowered.contains(k)) {
                    *v = Value::String("[REDACTED]".to_string());
                } else {
                    redact_json(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("abc"), "***@***.***");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
    }

    #[test]
    fn test_safe_token_log() {
        assert_eq!(safe_token_log("eyJhbGciOiJIUzI1NiJ9"), "eyJh...NiJ9");
        assert_eq!(safe_token_log("short"), "***");
    }

    #[test]
    fn test_redact_json_nested() {
        let mut body = json!({
            "email": "user@example.com",
            "current_password": "Secret123",
            "data": { "token": "abc.def.ghi", "user": { "id": "U_1" } },
            "items": [{ "new_password": "x" }]
        });
        redact_json(&mut body);

        assert_eq!(body["email"], "user@example.com");
        assert_eq!(body["current_password"], "[REDACTED]");
        assert_eq!(body["data"]["token"], "[REDACTED]");
        assert_eq!(body["data"]["user"]["id"], "U_1");
        assert_eq!(body["items"][0]["new_password"], "[REDACTED]");
    }
}
