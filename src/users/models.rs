//! User data models

use serde::Serialize;
use sqlx::FromRow;

/// User database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields required to create an account; the store assigns id and timestamps.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
}
