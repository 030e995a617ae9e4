//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::backend::domain::models::budget::BudgetConfig;
use crate::backend::domain::models::checkin::CheckinRecord;
use crate::backend::domain::models::expense::ExpenseEntry;

/// Trait defining the interface for daily check-in storage operations
#[async_trait]
pub trait CheckinStorage: Send + Sync {
    /// Insert or overwrite the record for (user_id, date).
    /// Implementations must make this a single atomic write per key.
    async fn upsert_checkin(&self, record: &CheckinRecord) -> Result<()>;

    /// Retrieve the record for a specific day
    async fn get_checkin(&self, user_id: &str, date: NaiveDate) -> Result<Option<CheckinRecord>>;

    /// Full history for a user, ordered by date descending (most recent first)
    async fn list_checkins_descending(&self, user_id: &str) -> Result<Vec<CheckinRecord>>;
}

/// Trait defining the interface for expense storage operations
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Store a new expense
    async fn store_expense(&self, expense: &ExpenseEntry) -> Result<()>;

    /// List a user's expenses with start <= date < end, newest first
    async fn list_expenses_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseEntry>>;

    /// Delete a single expense owned by the user
    /// Returns true if the expense was found and deleted, false otherwise
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<bool>;
}

/// Trait defining the interface for per-user budget settings
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    async fn get_budget_config(&self, user_id: &str) -> Result<Option<BudgetConfig>>;

    /// Insert or replace the user's settings
    async fn store_budget_config(&self, user_id: &str, config: &BudgetConfig) -> Result<()>;
}
