//! # Backend Module
//!
//! Contains all non-binary logic of the spend & streak service.
//!
//! This module brings together:
//! - **Domain**: check-in, streak, expense and budget rules
//! - **Storage**: SQLite persistence behind async traits
//! - **IO**: the axum REST layer
//! - **Config**: file and environment configuration
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::backend::config::AppConfig;
use crate::backend::domain::models::budget::BudgetConfig;
use crate::backend::domain::{CheckinService, Clock, ExpenseService, SettingsService};
use crate::backend::io::rest::{checkin_apis, expense_apis, health_apis, settings_apis};
use crate::backend::storage::{CheckinRepository, DbConnection, ExpenseRepository, SettingsRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub checkin_service: CheckinService,
    pub expense_service: ExpenseService,
    pub settings_service: SettingsService,
    pub clock: Arc<dyn Clock>,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    let clock = config.clock()?;
    info!("Check-in days follow UTC offset {}", clock.offset());

    info!("Setting up domain model");
    Ok(build_app_state(db_conn, Arc::new(clock), config.default_budget))
}

/// Wire the repositories and services over one connection and clock
pub fn build_app_state(db_conn: DbConnection, clock: Arc<dyn Clock>, default_budget: BudgetConfig) -> AppState {
    let settings_service = SettingsService::new(
        Arc::new(SettingsRepository::new(db_conn.clone())),
        default_budget,
    );
    let checkin_service = CheckinService::new(
        Arc::new(CheckinRepository::new(db_conn.clone())),
        clock.clone(),
    );
    let expense_service = ExpenseService::new(
        Arc::new(ExpenseRepository::new(db_conn)),
        settings_service.clone(),
        clock.clone(),
    );

    AppState {
        checkin_service,
        expense_service,
        settings_service,
        clock,
    }
}

/// CORS policy that lets the configured frontend origin call the API
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid frontend origin: {}", frontend_url))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .nest("/checkins", checkin_apis::router())
        .nest("/expenses", expense_apis::router())
        .route("/summary", get(expense_apis::get_monthly_summary))
        .nest("/settings", settings_apis::router());

    Router::new()
        .route("/health", get(health_apis::health))
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_bad_origin() {
        assert!(cors_layer("http://localhost:8080").is_ok());
        assert!(cors_layer("bad\norigin").is_err());
    }

    #[tokio::test]
    async fn test_initialize_backend_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_url: format!("sqlite:{}", dir.path().join("test.db").display()),
            checkin_utc_offset_minutes: 540,
            ..AppConfig::default()
        };

        let state = initialize_backend(&config).await.unwrap();
        let settings = state.settings_service.get_settings("user-1").await.unwrap();
        assert_eq!(settings, BudgetConfig::default());
    }
}
