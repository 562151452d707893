// src/profile/handlers/avatar.rs

use axum::{
    extract::{multipart::MultipartError, Extension, Json, Multipart, Path},
    http::StatusCode,
    response::IntoResponse,
};
use infer::Infer;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs as tokio_fs;
use tracing::{error, info, warn};

use crate::auth::AuthedUser;
use crate::common::{generate_raw_id, ApiError, AppState, Envelope};
use crate::users::User;

/// File size limit: 5MB
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
/// Request body limit for the upload route; leaves room for multipart framing.
pub const MAX_UPLOAD_BODY: usize = MAX_FILE_SIZE + 64 * 1024;

const AVATAR_URL_PREFIX: &str = "/avatars/";

/// POST /v1/user/avatar - Upload avatar (multipart field `avatar`)
pub async fn upload_avatar(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    mut multipart: Multipart,
) -> Result<Json<Envelope<User>>, ApiError> {
    info!(user_id = %authed.id(), "Avatar upload initiated");

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("avatar") {
            continue;
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        let user = store_avatar(&state, authed.user, &data).await?;
        return Ok(Json(Envelope::ok(user)));
    }

    Err(ApiError::BadRequest("No avatar file found".to_string()))
}

/// DELETE /v1/user/avatar - Remove avatar
pub async fn remove_avatar(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<Envelope<User>>, ApiError> {
    let mut user = authed.user;

    if let Some(previous) = user.avatar.take() {
        delete_local_avatar(&state, &user.id, &previous).await;
    }

    let user = state.users.update(&user).await?;
    info!(user_id = %user.id, "Avatar removed successfully");

    Ok(Json(Envelope::ok(user)))
}

/// GET /avatars/:user_id/:filename - Serve avatar files
pub async fn serve_avatar(
    Extension(state): Extension<Arc<AppState>>,
    Path((user_id, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let file_path = avatar_path(&state, &user_id, &filename)
        .ok_or_else(|| ApiError::NotFound("Avatar not found".to_string()))?;

    let file_content = match tokio_fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound("Avatar not found".to_string()));
        }
        Err(e) => {
            error!(error = %e, file_path = %file_path.display(), "Failed to read avatar file");
            return Err(ApiError::InternalServer(
                "Failed to read avatar file".to_string(),
            ));
        }
    };

    Ok((
        StatusCode::OK,
        [
            ("Content-Type", content_type_for(&filename)),
            ("Cache-Control", "public, max-age=31536000"),
        ],
        file_content,
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Validate `data`, write it under the user's avatar directory and point the
/// user record at it. The previous local avatar, if any, is removed.
pub async fn store_avatar(state: &AppState, mut user: User, data: &[u8]) -> Result<User, ApiError> {
    if data.is_empty() {
        return Err(ApiError::BadRequest("Avatar file is empty".to_string()));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(ApiError::PayloadTooLarge(
            "File size exceeds 5MB limit".to_string(),
        ));
    }

    let extension = image_extension(data).ok_or_else(|| {
        ApiError::BadRequest(
            "Invalid image type. Only JPEG, PNG, GIF, and WebP are supported".to_string(),
        )
    })?;

    let user_dir = state.avatars_dir.join(sanitize_component(&user.id));
    tokio_fs::create_dir_all(&user_dir).await.map_err(|e| {
        error!(error = %e, dir = %user_dir.display(), "Failed to create avatar directory");
        ApiError::InternalServer("Failed to save avatar file".to_string())
    })?;

    let filename = format!("{}.{}", generate_raw_id(12), extension);
    let file_path = user_dir.join(&filename);
    tokio_fs::write(&file_path, data).await.map_err(|e| {
        error!(error = %e, file_path = %file_path.display(), "Failed to save avatar file");
        ApiError::InternalServer("Failed to save avatar file".to_string())
    })?;

    let previous = user.avatar.replace(format!(
        "{}{}/{}",
        AVATAR_URL_PREFIX,
        sanitize_component(&user.id),
        filename
    ));

    let user = match state.users.update(&user).await {
        Ok(user) => user,
        Err(e) => {
            // Don't leave an orphaned file behind when the record wasn't updated.
            let _ = tokio_fs::remove_file(&file_path).await;
            return Err(ApiError::DatabaseError(e));
        }
    };

    if let Some(previous) = previous {
        delete_local_avatar(state, &user.id, &previous).await;
    }

    info!(user_id = %user.id, filename = %filename, "Avatar uploaded successfully");
    Ok(user)
}

async fn delete_local_avatar(state: &AppState, user_id: &str, avatar_url: &str) {
    let Some(rest) = avatar_url.strip_prefix(AVATAR_URL_PREFIX) else {
        return;
    };
    let Some((owner, filename)) = rest.split_once('/') else {
        return;
    };
    if owner != sanitize_component(user_id) {
        return;
    }

    if let Some(path) = avatar_path(state, owner, filename) {
        if let Err(e) = tokio_fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, file_path = %path.display(), "Failed to remove old avatar");
            }
        }
    }
}

fn avatar_path(state: &AppState, user_id: &str, filename: &str) -> Option<PathBuf> {
    let user_id = sanitize_component(user_id);
    let filename = sanitize_component(filename);
    if user_id.is_empty() || filename.is_empty() || user_id == "." || filename == "." {
        return None;
    }
    Some(state.avatars_dir.join(user_id).join(filename))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge("File size exceeds 5MB limit".to_string())
    } else {
        ApiError::BadRequest(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// Sniffed extension for supported image types.
pub fn image_extension(data: &[u8]) -> Option<&'static str> {
    let info = Infer::new().get(data)?;
    match info.mime_type() {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

/// Reduce a path component to `[A-Za-z0-9._-]` without any `..`.
pub fn sanitize_component(component: &str) -> String {
    let cleaned: String = component
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_')
        .take(255)
        .collect();
    cleaned.replace("..", "")
}
