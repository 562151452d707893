//! Authentication handlers

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::extractors::AuthedUser;
use super::models::{AuthPayload, LoginRequest, RegisterRequest};
use super::password::{hash_password, verify_password};
use super::validators::{LoginValidator, RegisterValidator};
use crate::common::{safe_email_log, ApiError, AppState, Envelope, Validator};
use crate::users::{is_unique_violation, NewUser, User};

/// POST /v1/auth/register
/// Creates an account and returns a bearer token for it
///
/// # Request Body
/// ```json
/// { "email": "user@example.com", "password": "Secret123", "name": "User" }
/// ```
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<AuthPayload>>), ApiError> {
    RegisterValidator.validate(&request).into_result()?;

    let password_hash = hash_password(&request.password).await?;
    let name = request
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user = state
        .users
        .insert(NewUser {
            email: request.email,
            name,
            password_hash,
        })
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("email is already registered".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

    let payload = issue_for(&state, user)?;
    info!(user_id = %payload.user.id, "Account registered");

    Ok((StatusCode::CREATED, Json(Envelope::ok(payload))))
}

/// POST /v1/auth/login
/// Exchanges email and password for a bearer token
///
/// # Response
/// ```json
/// { "message": "OK", "data": { "token": "<jwt>", "expires_at": "...", "user": { ... } } }
/// ```
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Envelope<AuthPayload>>, ApiError> {
    LoginValidator.validate(&request).into_result()?;

    let user = match state.users.find_by_email(&request.email).await? {
        Some(user) => user,
        None => {
            warn!(email = %safe_email_log(&request.email), "Login failed: unknown email");
            return Err(invalid_credentials());
        }
    };

    if !verify_password(&request.password, &user.password_hash).await? {
        warn!(user_id = %user.id, "Login failed: wrong password");
        return Err(invalid_credentials());
    }

    let payload = issue_for(&state, user)?;
    info!(user_id = %payload.user.id, "User logged in");

    Ok(Json(Envelope::ok(payload)))
}

/// GET /v1/user/me
/// Returns the current authenticated user
pub async fn me_handler(authed: AuthedUser) -> Json<Envelope<User>> {
    Json(Envelope::ok(authed.user))
}

/// POST /v1/auth/logout
/// Tokens are not revocable; the client discards its copy.
pub async fn logout_handler(authed: AuthedUser) -> Json<Envelope<serde_json::Value>> {
    info!(user_id = %authed.id(), jti = %authed.token_id, "User logout acknowledged");
    Json(Envelope::ok(serde_json::json!({})))
}

fn issue_for(state: &AppState, user: User) -> Result<AuthPayload, ApiError> {
    let issued = state.tokens.issue(&user)?;
    Ok(AuthPayload {
        token: issued.token,
        expires_at: issued.expires_at,
        user,
    })
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("invalid credentials".to_string())
}
