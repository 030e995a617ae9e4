//! # REST API for daily check-ins
//!
//! Recording a check-in and reading the caller's current streak.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::CheckinRequest;
use tracing::{error, info, warn};

use super::errors::{domain_error_response, error_response};
use super::user::require_user_id;
use crate::backend::io::rest::mappers::checkin_mapper::CheckinMapper;
use crate::backend::AppState;

/// Create a router for check-in related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_checkin))
        .route("/status", get(get_checkin_status))
}

/// Record (or replace) the caller's check-in for a day
pub async fn record_checkin(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CheckinRequest>, JsonRejection>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("POST /api/checkins - bad body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    info!("POST /api/checkins - user: {}, request: {:?}", user_id, request);

    let command = match CheckinMapper::to_command(user_id, request) {
        Ok(command) => command,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.checkin_service.record_checkin(command).await {
        Ok(result) => {
            let response = CheckinMapper::to_checkin_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to record check-in: {:#}", e);
            domain_error_response(&e)
        }
    }
}

/// Whether the caller checked in today, and the current streak
pub async fn get_checkin_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    info!("GET /api/checkins/status - user: {}", user_id);

    match state.checkin_service.status(&user_id).await {
        Ok(status) => {
            let response = CheckinMapper::to_status_response(status);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get check-in status: {:#}", e);
            domain_error_response(&e)
        }
    }
}
