//! # REST API for the expense ledger
//!
//! Creating, listing and deleting expenses, plus the monthly budget summary.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use chrono::Datelike;
use serde::Deserialize;
use shared::{CreateExpenseRequest, DeleteExpenseResponse, ExpenseListResponse};
use tracing::{error, info, warn};

use super::errors::{domain_error_response, error_response};
use super::user::require_user_id;
use crate::backend::domain::commands::expense::MonthQuery;
use crate::backend::io::rest::mappers::budget_mapper::BudgetMapper;
use crate::backend::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::backend::AppState;

/// Query parameters selecting a calendar month. Missing values fall back to
/// the current month on the service clock.
#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Create a router for expense related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", delete(delete_expense))
}

fn month_query(
    state: &AppState,
    user_id: String,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> Result<MonthQuery, Response> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Bad month query: {}", rejection.body_text());
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let today = state.clock.today();
    Ok(MonthQuery {
        user_id,
        year: params.year.unwrap_or_else(|| today.year()),
        month: params.month.unwrap_or_else(|| today.month()),
    })
}

/// Log a new expense for the caller
pub async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("POST /api/expenses - bad body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    info!("POST /api/expenses - user: {}, request: {:?}", user_id, request);

    let command = match ExpenseMapper::to_create_command(user_id, request) {
        Ok(command) => command,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.expense_service.create_expense(command).await {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to create expense: {:#}", e);
            domain_error_response(&e)
        }
    }
}

/// The caller's expenses for one month, newest first
pub async fn list_expenses(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let query = match month_query(&state, user_id, params) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!("GET /api/expenses - query: {:?}", query);

    match state.expense_service.list_expenses(&query).await {
        Ok(expenses) => {
            let response = ExpenseListResponse {
                year: query.year,
                month: query.month,
                expenses: ExpenseMapper::to_dto_list(expenses),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list expenses: {:#}", e);
            domain_error_response(&e)
        }
    }
}

/// Delete one of the caller's expenses
pub async fn delete_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    info!("DELETE /api/expenses/{} - user: {}", id, user_id);

    match state.expense_service.delete_expense(&user_id, &id).await {
        Ok(true) => {
            let response = DeleteExpenseResponse {
                success_message: format!("Expense {} deleted", id),
                id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(false) => error_response(StatusCode::NOT_FOUND, format!("Expense not found: {}", id)),
        Err(e) => {
            error!("Failed to delete expense {}: {:#}", id, e);
            domain_error_response(&e)
        }
    }
}

/// Month totals by category with the alert level against the caller's limits
pub async fn get_monthly_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> impl IntoResponse {
    let user_id = match require_user_id(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let query = match month_query(&state, user_id, params) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!("GET /api/summary - query: {:?}", query);

    match state.expense_service.monthly_summary(&query).await {
        Ok(result) => (StatusCode::OK, Json(BudgetMapper::to_summary_response(result))).into_response(),
        Err(e) => {
            error!("Failed to build monthly summary: {:#}", e);
            domain_error_response(&e)
        }
    }
}
