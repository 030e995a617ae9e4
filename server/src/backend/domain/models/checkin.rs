//! Domain model for a daily check-in.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One record per (user, calendar day). A later check-in for the same day
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub user_id: String,
    pub date: NaiveDate,
    /// True when the tracked behaviour did NOT happen that day
    pub compliant: bool,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CheckinValidationError {
    #[error("Invalid date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
}
