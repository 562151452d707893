// src/profile/handlers/profile.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tracing::{error, info};

use super::super::models::UpdateProfileRequest;
use super::super::validators::ProfileValidator;
use crate::auth::AuthedUser;
use crate::common::{safe_email_log, ApiError, AppState, Envelope, Validator};
use crate::users::{is_unique_violation, User};

/// PUT /v1/user/profile - Update email and/or display name
pub async fn update_profile_handler(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Envelope<User>>, ApiError> {
    info!(user_id = %authed.id(), "Profile update request received");

    ProfileValidator.validate(&request).into_result()?;

    let mut user = authed.user;

    if let Some(email) = &request.email {
        let email = email.trim();
        if state.users.email_taken_by_other(email, &user.id).await? {
            info!(
                user_id = %user.id,
                email = %safe_email_log(email),
                "Profile update rejected: email in use"
            );
            return Err(ApiError::Conflict("email is already registered".to_string()));
        }
        user.email = email.to_string();
    }

    if let Some(name) = &request.name {
        let name = name.trim();
        user.name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    // The unique index still guards against a concurrent registration of the same email.
    let user = state.users.update(&user).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict("email is already registered".to_string())
        } else {
            error!(error = %e, user_id = %user.id, "Database error updating profile");
            ApiError::DatabaseError(e)
        }
    })?;

    info!(user_id = %user.id, "Profile updated successfully");

    Ok(Json(Envelope::ok(user)))
}
