//! Daily check-in writes.
//!
//! The ledger resolves a raw check-in into its canonical record (which day,
//! compliant or not) and writes it through [`CheckinStorage::upsert_checkin`],
//! so a user has at most one record per calendar day and a repeated
//! check-in replaces the earlier one.
//!
//! A missing or non-boolean `compliant` value is recorded as `false`, i.e.
//! "the tracked behaviour happened". Callers that omit the field get a
//! streak-breaking record, not a clean day.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::backend::domain::clock::Clock;
use crate::backend::domain::commands::checkin::RecordCheckinCommand;
use crate::backend::domain::models::checkin::CheckinRecord;
use crate::backend::storage::CheckinStorage;

#[derive(Clone)]
pub struct CheckinLedger {
    storage: Arc<dyn CheckinStorage>,
    clock: Arc<dyn Clock>,
}

impl CheckinLedger {
    pub fn new(storage: Arc<dyn CheckinStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Only a JSON `true` counts as compliant; everything else, including a
    /// missing value, is treated as `false`.
    pub fn coerce_compliant(raw: Option<&serde_json::Value>) -> bool {
        matches!(raw, Some(serde_json::Value::Bool(true)))
    }

    /// Resolve the upsert key and value without touching storage
    pub fn resolve(&self, command: &RecordCheckinCommand) -> CheckinRecord {
        CheckinRecord {
            user_id: command.user_id.clone(),
            date: command.date.unwrap_or_else(|| self.clock.today()),
            compliant: command.compliant.unwrap_or(false),
        }
    }

    /// Write the check-in for (user, day), replacing any earlier one
    pub async fn upsert_checkin(&self, command: RecordCheckinCommand) -> Result<CheckinRecord> {
        let record = self.resolve(&command);
        self.storage.upsert_checkin(&record).await?;

        info!(
            "Recorded check-in for user {} on {}: compliant={}",
            record.user_id, record.date, record.compliant
        );
        Ok(record)
    }
}
