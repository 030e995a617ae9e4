//! Service configuration.
//!
//! Values come from an optional YAML file named by `SPEND_STREAK_CONFIG`,
//! then individual environment variables override the file.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::backend::domain::clock::SystemClock;
use crate::backend::domain::models::budget::{BudgetConfig, BudgetConfigError};
use crate::backend::storage::connection::DEFAULT_DATABASE_URL;

pub const CONFIG_PATH_ENV: &str = "SPEND_STREAK_CONFIG";

/// Largest offset chrono and real-world timezones allow, in minutes
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidEnvValue { key: &'static str, value: String },
    #[error("Invalid check-in UTC offset: {0} minutes (must be within +/-1080)")]
    InvalidUtcOffset(i32),
    #[error("Invalid default budget: {0}")]
    InvalidDefaultBudget(#[from] BudgetConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Origin allowed by CORS
    pub frontend_url: String,
    /// Offset of the timezone whose calendar day keys check-ins
    pub checkin_utc_offset_minutes: i32,
    pub default_budget: BudgetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            frontend_url: "http://localhost:8080".to_string(),
            checkin_utc_offset_minutes: 0,
            default_budget: BudgetConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the file named by `SPEND_STREAK_CONFIG` (if any), apply
    /// environment overrides and validate the result
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => {
                info!("{} not set, using built-in defaults", CONFIG_PATH_ENV);
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from `lookup`, which maps a variable name to its value
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue { key: "PORT", value: port })?;
        }
        if let Some(database_url) = lookup("DATABASE_URL") {
            self.database_url = database_url;
        }
        if let Some(frontend_url) = lookup("FRONTEND_URL") {
            self.frontend_url = frontend_url;
        }
        if let Some(offset) = lookup("CHECKIN_UTC_OFFSET_MINUTES") {
            self.checkin_utc_offset_minutes =
                offset.parse().map_err(|_| ConfigError::InvalidEnvValue {
                    key: "CHECKIN_UTC_OFFSET_MINUTES",
                    value: offset,
                })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkin_utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidUtcOffset(self.checkin_utc_offset_minutes));
        }
        self.default_budget.validate()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The service clock, pinned to the configured offset
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        let offset = FixedOffset::east_opt(self.checkin_utc_offset_minutes * 60)
            .ok_or(ConfigError::InvalidUtcOffset(self.checkin_utc_offset_minutes))?;
        Ok(SystemClock::new(offset))
    }
}
