//! Expense ledger operations and the monthly budget summary.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::backend::domain::budget_aggregator::BudgetAggregator;
use crate::backend::domain::clock::{month_bounds, Clock};
use crate::backend::domain::commands::expense::{CreateExpenseCommand, MonthQuery, MonthlySummaryResult};
use crate::backend::domain::models::budget::AlertLevel;
use crate::backend::domain::models::expense::{ExpenseEntry, ExpenseValidationError};
use crate::backend::domain::settings_service::SettingsService;
use crate::backend::storage::ExpenseStorage;

#[derive(Clone)]
pub struct ExpenseService {
    storage: Arc<dyn ExpenseStorage>,
    settings_service: SettingsService,
    aggregator: BudgetAggregator,
    clock: Arc<dyn Clock>,
}

impl ExpenseService {
    pub fn new(
        storage: Arc<dyn ExpenseStorage>,
        settings_service: SettingsService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            settings_service,
            aggregator: BudgetAggregator::new(),
            clock,
        }
    }

    /// Validate and store a new expense
    pub async fn create_expense(&self, command: CreateExpenseCommand) -> Result<ExpenseEntry> {
        info!("Creating expense: {:?}", command);

        if command.amount < 1 {
            return Err(ExpenseValidationError::AmountNotPositive(command.amount).into());
        }
        let amount = u64::try_from(command.amount)?;

        let memo = command
            .memo
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(memo) = &memo {
            if memo.chars().count() > ExpenseEntry::MAX_MEMO_LENGTH {
                return Err(ExpenseValidationError::MemoTooLong {
                    max: ExpenseEntry::MAX_MEMO_LENGTH,
                }
                .into());
            }
        }

        let expense = ExpenseEntry {
            id: ExpenseEntry::generate_id(),
            user_id: command.user_id,
            amount,
            category: command.category,
            date: command.date.unwrap_or_else(|| self.clock.today()),
            memo,
            created_at: Utc::now().to_rfc3339(),
        };

        self.storage.store_expense(&expense).await?;

        info!(
            "Stored expense {} for user {}: {} in {:?} on {}",
            expense.id, expense.user_id, expense.amount, expense.category, expense.date
        );
        Ok(expense)
    }

    /// All of the user's expenses in a calendar month, newest first
    pub async fn list_expenses(&self, query: &MonthQuery) -> Result<Vec<ExpenseEntry>> {
        let (start, end) = Self::bounds(query)?;
        let expenses = self
            .storage
            .list_expenses_between(&query.user_id, start, end)
            .await?;

        info!(
            "Found {} expenses for user {} in {}-{:02}",
            expenses.len(),
            query.user_id,
            query.year,
            query.month
        );
        Ok(expenses)
    }

    /// Delete an expense. Returns false when the user has no such expense.
    pub async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<bool> {
        info!("Deleting expense {} for user {}", expense_id, user_id);

        let deleted = self.storage.delete_expense(user_id, expense_id).await?;
        if !deleted {
            warn!("No expense {} found to delete for user {}", expense_id, user_id);
        }
        Ok(deleted)
    }

    /// Month totals per category and the alert level against the user's limits
    pub async fn monthly_summary(&self, query: &MonthQuery) -> Result<MonthlySummaryResult> {
        let entries = self.list_expenses(query).await?;
        let config = self.settings_service.get_settings(&query.user_id).await?;

        let summary = self.aggregator.aggregate(&entries, &config);
        let remaining = config.monthly_limit.saturating_sub(summary.total);

        match summary.alert_level {
            AlertLevel::Over => warn!(
                "User {} is over the monthly limit for {}-{:02}: {} >= {}",
                query.user_id, query.year, query.month, summary.total, config.monthly_limit
            ),
            AlertLevel::Warning => info!(
                "User {} passed the warning threshold for {}-{:02}: {} >= {}",
                query.user_id, query.year, query.month, summary.total, config.warning_threshold
            ),
            AlertLevel::Ok => {}
        }

        Ok(MonthlySummaryResult {
            year: query.year,
            month: query.month,
            summary,
            config,
            remaining,
        })
    }

    fn bounds(query: &MonthQuery) -> Result<(NaiveDate, NaiveDate)> {
        month_bounds(query.year, query.month).ok_or_else(|| {
            ExpenseValidationError::InvalidMonth {
                year: query.year,
                month: query.month,
            }
            .into()
        })
    }
}
