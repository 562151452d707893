//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /v1/auth/register` - Create an account and receive a token
/// - `POST /v1/auth/login` - Email/password login
/// - `POST /v1/auth/logout` - Logout (client-side token removal)
/// - `GET /v1/user/me` - Get current user information
pub fn auth_routes() -> Router {
    Router::new()
        .route("/v1/auth/register", post(handlers::register))
        .route("/v1/auth/login", post(handlers::login))
        .route("/v1/auth/logout", post(handlers::logout_handler))
        .route("/v1/user/me", get(handlers::me_handler))
}
