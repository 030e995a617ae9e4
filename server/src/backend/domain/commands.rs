//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod checkin {
    use chrono::NaiveDate;

    use crate::backend::domain::models::checkin::CheckinRecord;

    /// Input for recording a check-in.
    #[derive(Debug, Clone)]
    pub struct RecordCheckinCommand {
        pub user_id: String,
        /// None means "today" on the service clock
        pub date: Option<NaiveDate>,
        /// None is recorded as non-compliant
        pub compliant: Option<bool>,
    }

    /// Result of recording a check-in.
    #[derive(Debug, Clone)]
    pub struct RecordCheckinResult {
        pub record: CheckinRecord,
        pub streak: u32,
        pub message: String,
    }

    /// Result of a status query.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CheckinStatus {
        pub checked_today: bool,
        pub compliant_today: bool,
        pub streak: u32,
    }
}

pub mod expense {
    use chrono::NaiveDate;

    use crate::backend::domain::models::budget::{BudgetConfig, BudgetSummary};
    use crate::backend::domain::models::expense::ExpenseCategory;

    /// Input for creating a new expense.
    #[derive(Debug, Clone)]
    pub struct CreateExpenseCommand {
        pub user_id: String,
        pub date: Option<NaiveDate>,
        pub category: ExpenseCategory,
        pub amount: i64,
        pub memo: Option<String>,
    }

    /// A calendar month for one user.
    #[derive(Debug, Clone)]
    pub struct MonthQuery {
        pub user_id: String,
        pub year: i32,
        pub month: u32,
    }

    /// Result of a monthly summary query.
    #[derive(Debug, Clone)]
    pub struct MonthlySummaryResult {
        pub year: i32,
        pub month: u32,
        pub summary: BudgetSummary,
        pub config: BudgetConfig,
        pub remaining: u64,
    }
}

pub mod settings {
    /// Input for updating budget settings. Missing fields take the service defaults.
    #[derive(Debug, Clone)]
    pub struct UpdateSettingsCommand {
        pub user_id: String,
        pub monthly_limit: Option<u64>,
        pub warning_threshold: Option<u64>,
    }
}
