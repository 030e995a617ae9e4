//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints of the spend & streak service.
//! This layer handles:
//! - JSON request/response serialization
//! - Caller identity from the `X-User-Id` header
//! - Translating domain errors into status codes and `{ "error": ... }` bodies
//! - Request logging
//!
//! Handlers contain no business rules; they map DTOs to domain commands,
//! call a service and map the result back.

pub mod checkin_apis;
pub mod errors;
pub mod expense_apis;
pub mod health_apis;
pub mod mappers;
pub mod settings_apis;
pub mod user;
