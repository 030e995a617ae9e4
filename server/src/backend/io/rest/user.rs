//! Caller identity.
//!
//! Authentication happens upstream; the authenticated user id arrives in the
//! `X-User-Id` header and every `/api` handler requires it.

use axum::{
    http::{HeaderMap, StatusCode},
    response::Response,
};
use tracing::warn;

use super::errors::error_response;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The trimmed caller id, or a 401 response when the header is missing or blank
pub fn require_user_id(headers: &HeaderMap) -> Result<String, Response> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            warn!("Rejected request without {} header", USER_ID_HEADER);
            error_response(StatusCode::UNAUTHORIZED, "Missing X-User-Id header")
        })
}
