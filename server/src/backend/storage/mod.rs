//! # Storage Module
//!
//! Handles all data persistence for the service.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! repositories in [`repositories`] are the production implementation.
//!
//! ## Key Responsibilities
//!
//! - **Check-ins**: one row per (user, day), written with an atomic upsert
//! - **Expenses**: the per-user ledger, queried by calendar month
//! - **Budget settings**: one row per user
//! - **Connection Management**: pool creation and schema setup
//!
//! Calendar days are stored as `YYYY-MM-DD` text so that ordering by the
//! column is ordering by date.

pub mod connection;
pub mod repositories;
pub mod traits;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{CheckinRepository, ExpenseRepository, SettingsRepository};
pub use traits::{CheckinStorage, ExpenseStorage, SettingsStorage};
