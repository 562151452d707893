//! Argon2id password hashing
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use tracing::error;

use crate::common::ApiError;

fn hasher() -> Result<Argon2<'static>, ApiError> {
    let params = Params::new(15000, 2, 1, None).map_err(|e| {
        error!(error = %e, "Invalid argon2 parameters");
        ApiError::InternalServer("password hashing unavailable".to_string())
    })?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash `password` into a PHC string with a fresh random salt.
pub async fn hash_password(password: &str) -> Result<String, ApiError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!(error = %e, "Password hashing failed");
                ApiError::InternalServer("password hashing failed".to_string())
            })
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Password hashing task failed");
        ApiError::InternalServer("password hashing failed".to_string())
    })?
}

/// Returns `Ok(false)` on mismatch; a malformed stored hash is an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|e| {
            error!(error = %e, "Stored password hash is malformed");
            ApiError::InternalServer("stored credentials are unreadable".to_string())
        })?;
        // Parameters are read from the PHC string, so the default instance verifies any of them.
        Ok::<bool, ApiError>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Password verification task failed");
        ApiError::InternalServer("password verification failed".to_string())
    })?
}
