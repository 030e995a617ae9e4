//! Domain model for a logged expense.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expense categories. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Social,
    Transport,
    Hobby,
    Fixed,
    Other,
}

impl ExpenseCategory {
    /// Column value used by storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Social => "social",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Hobby => "hobby",
            ExpenseCategory::Fixed => "fixed",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(ExpenseCategory::Food),
            "social" => Some(ExpenseCategory::Social),
            "transport" => Some(ExpenseCategory::Transport),
            "hobby" => Some(ExpenseCategory::Hobby),
            "fixed" => Some(ExpenseCategory::Fixed),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub user_id: String,
    /// Smallest currency unit, at least 1
    pub amount: u64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub memo: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
}

impl ExpenseEntry {
    pub const MAX_MEMO_LENGTH: usize = 256;

    /// Generate an expense ID
    pub fn generate_id() -> String {
        format!("expense::{}", uuid::Uuid::new_v4())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Invalid amount: {0}. Amount must be at least 1")]
    AmountNotPositive(i64),
    #[error("Invalid memo: longer than {max} characters")]
    MemoTooLong { max: usize },
    #[error("Invalid date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_through_column_value() {
        let all = [
            ExpenseCategory::Food,
            ExpenseCategory::Social,
            ExpenseCategory::Transport,
            ExpenseCategory::Hobby,
            ExpenseCategory::Fixed,
            ExpenseCategory::Other,
        ];
        for category in all {
            assert_eq!(ExpenseCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(ExpenseCategory::parse("gambling"), None);
    }

    #[test]
    fn test_category_order_follows_declaration() {
        assert!(ExpenseCategory::Food < ExpenseCategory::Transport);
        assert!(ExpenseCategory::Fixed < ExpenseCategory::Other);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let id1 = ExpenseEntry::generate_id();
        let id2 = ExpenseEntry::generate_id();
        assert!(id1.starts_with("expense::"));
        assert_ne!(id1, id2);
    }
}
