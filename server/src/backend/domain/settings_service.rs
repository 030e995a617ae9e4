use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::backend::domain::commands::settings::UpdateSettingsCommand;
use crate::backend::domain::models::budget::BudgetConfig;
use crate::backend::storage::SettingsStorage;

/// Service for per-user budget settings
#[derive(Clone)]
pub struct SettingsService {
    storage: Arc<dyn SettingsStorage>,
    defaults: BudgetConfig,
}

impl SettingsService {
    /// `defaults` are applied to users without stored settings and to
    /// fields omitted from an update.
    pub fn new(storage: Arc<dyn SettingsStorage>, defaults: BudgetConfig) -> Self {
        Self { storage, defaults }
    }

    /// Get the user's settings, persisting the defaults on first access
    pub async fn get_settings(&self, user_id: &str) -> Result<BudgetConfig> {
        if let Some(config) = self.storage.get_budget_config(user_id).await? {
            return Ok(config);
        }

        info!("No budget settings for user {}, storing defaults", user_id);
        self.storage.store_budget_config(user_id, &self.defaults).await?;
        Ok(self.defaults)
    }

    /// Replace the user's settings after checking the threshold ordering
    pub async fn update_settings(&self, command: UpdateSettingsCommand) -> Result<BudgetConfig> {
        info!("Updating budget settings: {:?}", command);

        let config = BudgetConfig::new(
            command.monthly_limit.unwrap_or(self.defaults.monthly_limit),
            command.warning_threshold.unwrap_or(self.defaults.warning_threshold),
        );
        config.validate()?;

        self.storage.store_budget_config(&command.user_id, &config).await?;

        info!(
            "Stored budget settings for user {}: limit={} warning={}",
            command.user_id, config.monthly_limit, config.warning_threshold
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::budget::BudgetConfigError;
    use crate::backend::storage::{DbConnection, SettingsRepository};

    async fn setup_test() -> SettingsService {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        SettingsService::new(Arc::new(SettingsRepository::new(db)), BudgetConfig::default())
    }

    fn update(monthly_limit: Option<u64>, warning_threshold: Option<u64>) -> UpdateSettingsCommand {
        UpdateSettingsCommand {
            user_id: "user-1".to_string(),
            monthly_limit,
            warning_threshold,
        }
    }

    #[tokio::test]
    async fn test_first_read_returns_defaults() {
        let service = setup_test().await;
        let config = service.get_settings("user-1").await.expect("Failed to get settings");
        assert_eq!(config, BudgetConfig::new(30_000, 25_000));
    }

    #[tokio::test]
    async fn test_injected_defaults_are_used() {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        let service = SettingsService::new(
            Arc::new(SettingsRepository::new(db)),
            BudgetConfig::new(50_000, 40_000),
        );
        let config = service.get_settings("user-1").await.unwrap();
        assert_eq!(config, BudgetConfig::new(50_000, 40_000));
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let service = setup_test().await;
        service.update_settings(update(Some(5000), Some(3000))).await.unwrap();

        let config = service.get_settings("user-1").await.unwrap();
        assert_eq!(config, BudgetConfig::new(5000, 3000));

        // Other users are unaffected
        let other = service.get_settings("user-2").await.unwrap();
        assert_eq!(other, BudgetConfig::default());
    }

    #[tokio::test]
    async fn test_missing_fields_fall_back_to_defaults() {
        let service = setup_test().await;
        let config = service.update_settings(update(Some(40_000), None)).await.unwrap();
        assert_eq!(config, BudgetConfig::new(40_000, 25_000));
    }

    #[tokio::test]
    async fn test_threshold_above_limit_is_rejected() {
        let service = setup_test().await;
        service.update_settings(update(Some(5000), Some(3000))).await.unwrap();

        let result = service.update_settings(update(Some(1000), None)).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BudgetConfigError>(),
            Some(BudgetConfigError::ThresholdAboveLimit { .. })
        ));

        // Previous settings are kept
        let config = service.get_settings("user-1").await.unwrap();
        assert_eq!(config, BudgetConfig::new(5000, 3000));
    }
}
