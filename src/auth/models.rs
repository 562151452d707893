//! Authentication request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::User;

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` payload returned by register and login
#[derive(Serialize, Debug)]
pub struct AuthPayload {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
