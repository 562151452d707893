//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::common::{safe_email_log, safe_token_log, ApiError, AppState};
use crate::users::User;

/// Authenticated user extractor
///
/// Validates the bearer token and loads the current user from the store.
#[derive(Debug)]
pub struct AuthedUser {
    pub user: User,
    pub token_id: String,
}

impl AuthedUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<Arc<AppState>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                warn!("Authentication failed: missing Authorization header");
                ApiError::Unauthorized("missing auth".into())
            })?;

        let token = bearer_token(header);
        authenticate(&app_state, token).await
    }
}

/// Accepts both `Bearer <token>` and a raw token.
pub fn bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header).trim()
}

/// Resolve a raw token to the user it was issued for.
pub async fn authenticate(state: &AppState, token: &str) -> Result<AuthedUser, ApiError> {
    let claims = state.tokens.verify(token).map_err(|e| {
        warn!(error = %e, token = %safe_token_log(token), "JWT token validation failed");
        ApiError::Unauthorized("invalid token".into())
    })?;

    let user = state.users.find_by_id(&claims.sub).await.map_err(|e| {
        error!(
            error = %e,
            user_id = %claims.sub,
            "Database error during user lookup in authentication"
        );
        ApiError::DatabaseError(e)
    })?;

    match user {
        Some(user) => {
            debug!(
                user_id = %user.id,
                email = %safe_email_log(&user.email),
                jti = %claims.jti,
                "User authentication successful via extractor"
            );
            Ok(AuthedUser {
                user,
                token_id: claims.jti,
            })
        }
        None => {
            warn!(user_id = %claims.sub, "Authentication failed: user not found in database");
            Err(ApiError::Unauthorized("user not found".into()))
        }
    }
}
