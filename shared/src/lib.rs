use serde::{Deserialize, Serialize};

/// A single daily check-in as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Calendar day in ISO 8601 format (YYYY-MM-DD)
    pub date: String,
    /// True when the tracked behaviour did NOT happen that day
    pub compliant: bool,
}

/// Request body for recording today's (or a given day's) check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CheckinRequest {
    /// Optional day override (YYYY-MM-DD) - uses the service's current day if not provided
    #[serde(default)]
    pub date: Option<String>,
    /// Anything other than a JSON boolean `true` is recorded as non-compliant
    #[serde(default)]
    pub compliant: Option<serde_json::Value>,
}

/// Response after recording a check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinResponse {
    pub record: CheckinRecord,
    pub streak: u32,
    pub message: String,
}

/// Current check-in state for the calling user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakStatusResponse {
    pub checked_today: bool,
    /// False when there is no check-in for today yet
    pub compliant_today: bool,
    pub streak: u32,
}

/// Fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Social,
    Transport,
    Hobby,
    Fixed,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Food,
        ExpenseCategory::Social,
        ExpenseCategory::Transport,
        ExpenseCategory::Hobby,
        ExpenseCategory::Fixed,
        ExpenseCategory::Other,
    ];

    /// Wire name of the category
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
}

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Calendar day the money was spent (YYYY-MM-DD)
    pub date: String,
    pub category: ExpenseCategory,
    /// Amount in the smallest currency unit
    pub amount: u64,
    pub memo: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// Optional day override (YYYY-MM-DD) - uses the service's current day if not provided
    #[serde(default)]
    pub date: Option<String>,
    pub category: ExpenseCategory,
    /// Must be at least 1
    pub amount: i64,
    #[serde(default)]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub year: i32,
    pub month: u32,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub id: String,
    pub success_message: String,
}

/// Classification of a period's spend against the configured limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Ok,
    Warning,
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: u64,
}

/// Month totals with the alert derived from the user's budget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummaryResponse {
    pub year: i32,
    pub month: u32,
    pub total: u64,
    pub by_category: Vec<CategoryTotal>,
    pub alert_level: AlertLevel,
    pub monthly_limit: u64,
    pub warning_threshold: u64,
    /// Amount left before the monthly limit, never negative
    pub remaining: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    pub monthly_limit: u64,
    pub warning_threshold: u64,
}

/// Missing fields fall back to the service-wide defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateBudgetSettingsRequest {
    #[serde(default)]
    pub monthly_limit: Option<u64>,
    #[serde(default)]
    pub warning_threshold: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBudgetSettingsResponse {
    pub settings: BudgetSettings,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
