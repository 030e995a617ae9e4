//! Domain model for per-user budget limits and derived summaries.
use serde::{Deserialize, Serialize};

use super::expense::ExpenseCategory;

/// Spending limits for one user, in the smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub monthly_limit: u64,
    pub warning_threshold: u64,
}

impl BudgetConfig {
    pub const DEFAULT_MONTHLY_LIMIT: u64 = 30_000;
    pub const DEFAULT_WARNING_THRESHOLD: u64 = 25_000;
    /// Largest limit the settings table can hold
    pub const MAX_LIMIT: u64 = i64::MAX as u64;

    pub fn new(monthly_limit: u64, warning_threshold: u64) -> Self {
        Self {
            monthly_limit,
            warning_threshold,
        }
    }

    /// Reject configurations where the warning band would sit above the limit
    pub fn validate(&self) -> Result<(), BudgetConfigError> {
        for (field, value) in [
            ("monthly_limit", self.monthly_limit),
            ("warning_threshold", self.warning_threshold),
        ] {
            if value > Self::MAX_LIMIT {
                return Err(BudgetConfigError::LimitTooLarge {
                    field,
                    value,
                    max: Self::MAX_LIMIT,
                });
            }
        }
        if self.warning_threshold > self.monthly_limit {
            return Err(BudgetConfigError::ThresholdAboveLimit {
                warning_threshold: self.warning_threshold,
                monthly_limit: self.monthly_limit,
            });
        }
        Ok(())
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MONTHLY_LIMIT, Self::DEFAULT_WARNING_THRESHOLD)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BudgetConfigError {
    #[error("Invalid budget settings: warning threshold {warning_threshold} exceeds monthly limit {monthly_limit}")]
    ThresholdAboveLimit {
        warning_threshold: u64,
        monthly_limit: u64,
    },
    #[error("Invalid budget settings: {field} {value} exceeds the maximum of {max}")]
    LimitTooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Ok,
    Warning,
    Over,
}

impl AlertLevel {
    /// Both comparisons are inclusive: a total equal to the limit is `Over`.
    pub fn classify(total: u64, config: &BudgetConfig) -> Self {
        if total >= config.monthly_limit {
            AlertLevel::Over
        } else if total >= config.warning_threshold {
            AlertLevel::Warning
        } else {
            AlertLevel::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total: u64,
    pub by_category: Vec<CategoryTotal>,
    pub alert_level: AlertLevel,
}
