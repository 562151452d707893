// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode
//!
//! JSON bodies are logged with credential fields redacted. Multipart
//! uploads and non-JSON bodies are passed through untouched.

use axum::body::to_bytes;
use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, Level};

use crate::common::helpers::redact_json;

/// Same as axum's default body limit, which the JSON extractors would enforce anyway.
const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !tracing::enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let request = if is_json(&parts.headers) {
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;
        if let Some(logged) = redacted(&bytes) {
            debug!(method = %parts.method, uri = %parts.uri, request_body = %logged, "Request");
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(method = %parts.method, uri = %parts.uri, "Request (body not logged)");
        Request::from_parts(parts, body)
    };

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    if !is_json(&parts.headers) {
        debug!(status = %parts.status, "Response (body not logged)");
        return Ok(Response::from_parts(parts, body));
    }

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Some(logged) = redacted(&bytes) {
        debug!(status = %parts.status, response_body = %logged, "Response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

fn redacted(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let mut json: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    redact_json(&mut json);
    serde_json::to_string(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_redacted_hides_credentials() {
        let logged =
            redacted(br#"{"email":"a@b.co","password":"Secret123"}"#).expect("valid json");
        assert!(logged.contains("a@b.co"));
        assert!(!logged.contains("Secret123"));
        assert!(logged.contains("[REDACTED]"));
    }

    #[test]
    fn test_redacted_skips_non_json() {
        assert!(redacted(b"").is_none());
        assert!(redacted(b"\x89PNG binary").is_none());
    }

    #[test]
    fn test_is_json() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(is_json(&headers));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("multipart/form-data"));
        assert!(!is_json(&headers));
    }
}
