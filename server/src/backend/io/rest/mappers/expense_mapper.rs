use shared::{CreateExpenseRequest, Expense, ExpenseCategory};

use crate::backend::domain::clock::{format_iso_date, parse_iso_date};
use crate::backend::domain::commands::expense::CreateExpenseCommand;
use crate::backend::domain::models::expense::{
    ExpenseCategory as DomainExpenseCategory, ExpenseEntry, ExpenseValidationError,
};

pub struct ExpenseMapper;

impl ExpenseMapper {
    /// Convert shared ExpenseCategory to the domain category
    pub fn category_to_domain(dto: ExpenseCategory) -> DomainExpenseCategory {
        match dto {
            ExpenseCategory::Food => DomainExpenseCategory::Food,
            ExpenseCategory::Social => DomainExpenseCategory::Social,
            ExpenseCategory::Transport => DomainExpenseCategory::Transport,
            ExpenseCategory::Hobby => DomainExpenseCategory::Hobby,
            ExpenseCategory::Fixed => DomainExpenseCategory::Fixed,
            ExpenseCategory::Other => DomainExpenseCategory::Other,
        }
    }

    /// Convert the domain category to shared ExpenseCategory
    pub fn category_to_dto(domain: DomainExpenseCategory) -> ExpenseCategory {
        match domain {
            DomainExpenseCategory::Food => ExpenseCategory::Food,
            DomainExpenseCategory::Social => ExpenseCategory::Social,
            DomainExpenseCategory::Transport => ExpenseCategory::Transport,
            DomainExpenseCategory::Hobby => ExpenseCategory::Hobby,
            DomainExpenseCategory::Fixed => ExpenseCategory::Fixed,
            DomainExpenseCategory::Other => ExpenseCategory::Other,
        }
    }

    pub fn to_create_command(
        user_id: String,
        request: CreateExpenseRequest,
    ) -> Result<CreateExpenseCommand, ExpenseValidationError> {
        let date = match request.date {
            Some(raw) => Some(parse_iso_date(&raw).ok_or(ExpenseValidationError::InvalidDate(raw))?),
            None => None,
        };

        Ok(CreateExpenseCommand {
            user_id,
            date,
            category: Self::category_to_domain(request.category),
            amount: request.amount,
            memo: request.memo,
        })
    }

    pub fn to_dto(domain: ExpenseEntry) -> Expense {
        Expense {
            id: domain.id,
            date: format_iso_date(domain.date),
            category: Self::category_to_dto(domain.category),
            amount: domain.amount,
            memo: domain.memo,
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain_expenses: Vec<ExpenseEntry>) -> Vec<Expense> {
        domain_expenses.into_iter().map(Self::to_dto).collect()
    }
}
