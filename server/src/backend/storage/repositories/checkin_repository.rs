use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::backend::domain::clock::{format_iso_date, parse_iso_date};
use crate::backend::domain::models::checkin::CheckinRecord;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::CheckinStorage;

/// Repository for daily check-in operations
#[derive(Clone)]
pub struct CheckinRepository {
    db: DbConnection,
}

impl CheckinRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_record(row: &SqliteRow) -> Result<CheckinRecord> {
        let raw_date: String = row.get("check_date");
        let date = parse_iso_date(&raw_date)
            .ok_or_else(|| anyhow!("Corrupt check_date in checkins table: {}", raw_date))?;
        Ok(CheckinRecord {
            user_id: row.get("user_id"),
            date,
            compliant: row.get("compliant"),
        })
    }
}

#[async_trait]
impl CheckinStorage for CheckinRepository {
    async fn upsert_checkin(&self, record: &CheckinRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO checkins (user_id, check_date, compliant, updated_at)
            VALUES (?, ?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(user_id, check_date) DO UPDATE SET
                compliant = excluded.compliant,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&record.user_id)
        .bind(format_iso_date(record.date))
        .bind(record.compliant)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_checkin(&self, user_id: &str, date: NaiveDate) -> Result<Option<CheckinRecord>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, check_date, compliant
            FROM checkins
            WHERE user_id = ? AND check_date = ?
            "#,
        )
        .bind(user_id)
        .bind(format_iso_date(date))
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn list_checkins_descending(&self, user_id: &str) -> Result<Vec<CheckinRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, check_date, compliant
            FROM checkins
            WHERE user_id = ?
            ORDER BY check_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
