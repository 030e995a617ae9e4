use shared::{
    AlertLevel, BudgetSettings, CategoryTotal, MonthlySummaryResponse, UpdateBudgetSettingsRequest,
    UpdateBudgetSettingsResponse,
};

use super::expense_mapper::ExpenseMapper;
use crate::backend::domain::commands::expense::MonthlySummaryResult;
use crate::backend::domain::commands::settings::UpdateSettingsCommand;
use crate::backend::domain::models::budget::{AlertLevel as DomainAlertLevel, BudgetConfig};

pub struct BudgetMapper;

impl BudgetMapper {
    pub fn alert_level_to_dto(domain: DomainAlertLevel) -> AlertLevel {
        match domain {
            DomainAlertLevel::Ok => AlertLevel::Ok,
            DomainAlertLevel::Warning => AlertLevel::Warning,
            DomainAlertLevel::Over => AlertLevel::Over,
        }
    }

    pub fn to_settings_dto(config: BudgetConfig) -> BudgetSettings {
        BudgetSettings {
            monthly_limit: config.monthly_limit,
            warning_threshold: config.warning_threshold,
        }
    }

    pub fn to_update_command(user_id: String, request: UpdateBudgetSettingsRequest) -> UpdateSettingsCommand {
        UpdateSettingsCommand {
            user_id,
            monthly_limit: request.monthly_limit,
            warning_threshold: request.warning_threshold,
        }
    }

    pub fn to_update_response(config: BudgetConfig) -> UpdateBudgetSettingsResponse {
        UpdateBudgetSettingsResponse {
            settings: Self::to_settings_dto(config),
            success_message: "Budget settings updated successfully".to_string(),
        }
    }

    pub fn to_summary_response(result: MonthlySummaryResult) -> MonthlySummaryResponse {
        MonthlySummaryResponse {
            year: result.year,
            month: result.month,
            total: result.summary.total,
            by_category: result
                .summary
                .by_category
                .into_iter()
                .map(|t| CategoryTotal {
                    category: ExpenseMapper::category_to_dto(t.category),
                    amount: t.amount,
                })
                .collect(),
            alert_level: Self::alert_level_to_dto(result.summary.alert_level),
            monthly_limit: result.config.monthly_limit,
            warning_threshold: result.config.warning_threshold,
            remaining: result.remaining,
        }
    }
}
