use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::backend::domain::clock::{format_iso_date, parse_iso_date};
use crate::backend::domain::models::expense::{ExpenseCategory, ExpenseEntry};
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::ExpenseStorage;

/// Repository for expense operations
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_expense(row: &SqliteRow) -> Result<ExpenseEntry> {
        let raw_date: String = row.get("spent_at");
        let raw_category: String = row.get("category");
        let raw_amount: i64 = row.get("amount");

        Ok(ExpenseEntry {
            id: row.get("id"),
            user_id: row.get("user_id"),
            amount: u64::try_from(raw_amount)
                .map_err(|_| anyhow!("Corrupt amount in expenses table: {}", raw_amount))?,
            category: ExpenseCategory::parse(&raw_category)
                .ok_or_else(|| anyhow!("Unknown category in expenses table: {}", raw_category))?,
            date: parse_iso_date(&raw_date)
                .ok_or_else(|| anyhow!("Corrupt spent_at in expenses table: {}", raw_date))?,
            memo: row.get("memo"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn store_expense(&self, expense: &ExpenseEntry) -> Result<()> {
        let amount = i64::try_from(expense.amount)?;
        sqlx::query(
            r#"
            INSERT INTO expenses (id, user_id, spent_at, category, amount, memo, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&expense.id)
        .bind(&expense.user_id)
        .bind(format_iso_date(expense.date))
        .bind(expense.category.as_str())
        .bind(amount)
        .bind(&expense.memo)
        .bind(&expense.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_expenses_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExpenseEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, spent_at, category, amount, memo, created_at
            FROM expenses
            WHERE user_id = ? AND spent_at >= ? AND spent_at < ?
            ORDER BY spent_at DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(format_iso_date(start))
        .bind(format_iso_date(end))
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_expense).collect()
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
            .bind(expense_id)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(user_id: &str, date: NaiveDate, category: ExpenseCategory, amount: u64) -> ExpenseEntry {
        ExpenseEntry {
            id: ExpenseEntry::generate_id(),
            user_id: user_id.to_string(),
            amount,
            category,
            date,
            memo: Some("lunch".to_string()),
            created_at: "2025-06-01T12:00:00+00:00".to_string(),
        }
    }

    async fn setup_test() -> ExpenseRepository {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        ExpenseRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_list_round_trip() {
        let repository = setup_test().await;
        let stored = expense("user-1", day(2025, 6, 3), ExpenseCategory::Hobby, 1200);
        repository.store_expense(&stored).await.unwrap();

        let listed = repository
            .list_expenses_between("user-1", day(2025, 6, 1), day(2025, 7, 1))
            .await
            .unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[tokio::test]
    async fn test_list_respects_month_bounds_and_owner() {
        let repository = setup_test().await;
        let inside_first = expense("user-1", day(2025, 6, 1), ExpenseCategory::Food, 100);
        let inside_last = expense("user-1", day(2025, 6, 30), ExpenseCategory::Food, 200);
        let before = expense("user-1", day(2025, 5, 31), ExpenseCategory::Food, 300);
        let after = expense("user-1", day(2025, 7, 1), ExpenseCategory::Food, 400);
        let other_user = expense("user-2", day(2025, 6, 15), ExpenseCategory::Food, 500);
        for e in [&inside_first, &inside_last, &before, &after, &other_user] {
            repository.store_expense(e).await.unwrap();
        }

        let listed = repository
            .list_expenses_between("user-1", day(2025, 6, 1), day(2025, 7, 1))
            .await
            .unwrap();
        assert_eq!(listed, vec![inside_last, inside_first]);
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let repository = setup_test().await;
        let stored = expense("user-1", day(2025, 6, 3), ExpenseCategory::Other, 50);
        repository.store_expense(&stored).await.unwrap();

        assert!(!repository.delete_expense("user-2", &stored.id).await.unwrap());
        assert!(repository.delete_expense("user-1", &stored.id).await.unwrap());
        assert!(!repository.delete_expense("user-1", &stored.id).await.unwrap());
    }
}
