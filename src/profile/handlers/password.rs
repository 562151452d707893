// src/profile/handlers/password.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tracing::{info, warn};

use super::super::models::ChangePasswordRequest;
use super::super::validators::PasswordValidator;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Envelope, Validator};
use crate::users::User;

/// PUT /v1/user/password - Change password after re-checking the current one
pub async fn change_password_handler(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Envelope<User>>, ApiError> {
    PasswordValidator.validate(&request).into_result()?;

    let mut user = authed.user;

    if !verify_password(&request.current_password, &user.password_hash).await? {
        warn!(user_id = %user.id, "Password change rejected: current password mismatch");
        return Err(ApiError::Unauthorized(
            "current password is incorrect".to_string(),
        ));
    }

    user.password_hash = hash_password(&request.new_password).await?;
    let user = state.users.update(&user).await?;

    info!(user_id = %user.id, "Password changed");

    Ok(Json(Envelope::ok(user)))
}
