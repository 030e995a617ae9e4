//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! ## Supported Operations
//!
//! - **GET /health**: liveness
//! - **POST /api/checkins**, **GET /api/checkins/status**: daily check-ins and streak
//! - **GET/POST /api/expenses**, **DELETE /api/expenses/:id**: expense ledger
//! - **GET /api/summary**: monthly totals and budget alert
//! - **GET/PUT /api/settings**: per-user budget limits

pub mod rest;

pub use rest::*;
