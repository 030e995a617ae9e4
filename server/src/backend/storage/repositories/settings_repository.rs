use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::Row;

use crate::backend::domain::models::budget::BudgetConfig;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::SettingsStorage;

/// Repository for per-user budget settings
#[derive(Clone)]
pub struct SettingsRepository {
    db: DbConnection,
}

impl SettingsRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn get_budget_config(&self, user_id: &str) -> Result<Option<BudgetConfig>> {
        let row = sqlx::query(
            r#"
            SELECT monthly_limit, warning_threshold
            FROM budget_settings
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => {
                let monthly_limit: i64 = r.get("monthly_limit");
                let warning_threshold: i64 = r.get("warning_threshold");
                Ok(Some(BudgetConfig {
                    monthly_limit: u64::try_from(monthly_limit)
                        .map_err(|_| anyhow!("Corrupt monthly_limit for user {}", user_id))?,
                    warning_threshold: u64::try_from(warning_threshold)
                        .map_err(|_| anyhow!("Corrupt warning_threshold for user {}", user_id))?,
                }))
            }
            None => Ok(None),
        }
    }

    async fn store_budget_config(&self, user_id: &str, config: &BudgetConfig) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO budget_settings (user_id, monthly_limit, warning_threshold, updated_at)
            VALUES (?, ?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(user_id) DO UPDATE SET
                monthly_limit = excluded.monthly_limit,
                warning_threshold = excluded.warning_threshold,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(user_id)
        .bind(i64::try_from(config.monthly_limit)?)
        .bind(i64::try_from(config.warning_threshold)?)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}
