// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! User ids look like `U_K7NP3X`; stored upload names use the raw form.
//! The alphabet excludes I, L, O and U.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const USER_PREFIX: &str = "U";
const USER_ID_LEN: usize = 6;

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a raw Crockford Base32 string without prefix
/// Useful for filenames or other non-entity identifiers
pub fn generate_raw_id(length: usize) -> String {
    generate_crockford_string(length)
}

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    format!("{}_{}", USER_PREFIX, generate_crockford_string(USER_ID_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_id_format() {
        let id = generate_user_id();
        assert!(id.starts_with("U_"));
        assert_eq!(id.len(), 8); // "U_" + 6 chars
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let raw = generate_raw_id(64);
        for c in raw.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }
        assert!(!raw.contains('I'));
        assert!(!raw.contains('L'));
        assert!(!raw.contains('O'));
        assert!(!raw.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            assert!(ids.insert(generate_raw_id(10)), "Duplicate ID generated");
        }
    }
}
