//! # REST API for budget settings

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::UpdateBudgetSettingsRequest;
use tracing::{error, info, warn};

use super::errors::{domain_error_response, error_response};
use super::user::require_user_id;
use crate::backend::io::rest::mappers::budget_mapper::BudgetMapper;
use crate::backend::AppState;

/// Create a router for settings related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

/// The caller's budget limits
pub async fn get_settings(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    info!("GET /api/settings - user: {}", user_id);

    match state.settings_service.get_settings(&user_id).await {
        Ok(config) => (StatusCode::OK, Json(BudgetMapper::to_settings_dto(config))).into_response(),
        Err(e) => {
            error!("Failed to get settings: {:#}", e);
            domain_error_response(&e)
        }
    }
}

/// Replace the caller's budget limits
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateBudgetSettingsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("PUT /api/settings - bad body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    info!("PUT /api/settings - user: {}, request: {:?}", user_id, request);

    let command = BudgetMapper::to_update_command(user_id, request);
    match state.settings_service.update_settings(command).await {
        Ok(config) => (StatusCode::OK, Json(BudgetMapper::to_update_response(config))).into_response(),
        Err(e) => {
            error!("Failed to update settings: {:#}", e);
            domain_error_response(&e)
        }
    }
}
