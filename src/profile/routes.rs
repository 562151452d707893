// src/profile/routes.rs

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use super::handlers::{avatar, password, profile};

pub fn profile_routes() -> Router {
    Router::new()
        // Avatar routes
        .route(
            "/v1/user/avatar",
            post(avatar::upload_avatar)
                .delete(avatar::remove_avatar)
                .layer(DefaultBodyLimit::max(avatar::MAX_UPLOAD_BODY)),
        )
        .route("/avatars/:user_id/:filename", get(avatar::serve_avatar))
        // Profile routes
        .route("/v1/user/profile", put(profile::update_profile_handler))
        // Password routes
        .route("/v1/user/password", put(password::change_password_handler))
}
