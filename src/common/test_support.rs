// Shared fixtures for module tests

use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

use super::{migrations::migrate, AppState, JwtSettings};
use crate::auth::password::hash_password;
use crate::auth::TokenIssuer;
use crate::users::{NewUser, User};

pub const TEST_PASSWORD: &str = "Passw0rdTest";

pub fn test_settings() -> JwtSettings {
    JwtSettings {
        key: "test-secret-please-change".to_string(),
        issuer: "app".to_string(),
        audience: "app-clients".to_string(),
        expiry_minutes: 60,
    }
}

/// Fresh in-memory database plus a temporary avatars directory.
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn test_state() -> (Arc<AppState>, TempDir) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrate(&pool, false).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let tokens = TokenIssuer::new(&test_settings()).unwrap();
    let state = AppState::new(pool, tokens, dir.path().to_path_buf());

    (Arc::new(state), dir)
}

pub async fn create_user(state: &AppState, email: &str) -> User {
    state
        .users
        .insert(NewUser {
            email: email.to_string(),
            name: Some("Test User".to_string()),
            password_hash: hash_password(TEST_PASSWORD).await.unwrap(),
        })
        .await
        .unwrap()
}
