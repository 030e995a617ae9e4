//! # Domain Module
//!
//! Contains all business logic for the spend & streak tracker.
//!
//! This module holds the rules for daily check-ins, the expense ledger and
//! the monthly budget. It operates independently of any specific transport
//! or storage mechanism; storage is reached through the traits in
//! `backend::storage`.
//!
//! ## Module Organization
//!
//! - **checkin_ledger**: resolves and upserts the one check-in per user per day
//! - **streak**: current streak from a descending check-in history
//! - **budget_aggregator**: per-category totals and the alert level
//! - **checkin_service**: check-in recording and status queries
//! - **expense_service**: expense CRUD and the monthly summary
//! - **settings_service**: per-user budget limits
//! - **clock**: the canonical "today" and calendar helpers
//!
//! ## Business Rules
//!
//! - A check-in for a day that already has one replaces it
//! - Anything other than an explicit `true` is recorded as non-compliant
//! - The streak counts compliant days from the newest record and stops at
//!   the first non-compliant one; days without a record are skipped
//! - Expense amounts are whole units of the smallest currency unit, at least 1
//! - The alert level is `over` at or above the monthly limit, `warning` at or
//!   above the warning threshold

pub mod budget_aggregator;
pub mod checkin_ledger;
pub mod checkin_service;
pub mod clock;
pub mod commands;
pub mod expense_service;
pub mod models;
pub mod settings_service;
pub mod streak;

pub use budget_aggregator::BudgetAggregator;
pub use checkin_ledger::CheckinLedger;
pub use checkin_service::CheckinService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use expense_service::ExpenseService;
pub use settings_service::SettingsService;
pub use streak::StreakCalculator;
