// src/profile/models.rs

use serde::Deserialize;

// ============================================================================
// Profile Models
// ============================================================================

/// PUT /v1/user/profile body. An empty `name` clears the display name.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

// ============================================================================
// Password Models
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}
