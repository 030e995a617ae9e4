//! Check-in workflow: record today's answer and report the resulting streak.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::backend::domain::checkin_ledger::CheckinLedger;
use crate::backend::domain::clock::Clock;
use crate::backend::domain::commands::checkin::{CheckinStatus, RecordCheckinCommand, RecordCheckinResult};
use crate::backend::domain::streak::StreakCalculator;
use crate::backend::storage::CheckinStorage;

const COMPLIANT_MESSAGE: &str = "Another clean day recorded. Keep it going!";
const NON_COMPLIANT_MESSAGE: &str = "Recorded. Tomorrow is a fresh start.";

#[derive(Clone)]
pub struct CheckinService {
    ledger: CheckinLedger,
    storage: Arc<dyn CheckinStorage>,
    calculator: StreakCalculator,
    clock: Arc<dyn Clock>,
}

impl CheckinService {
    pub fn new(storage: Arc<dyn CheckinStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ledger: CheckinLedger::new(storage.clone(), clock.clone()),
            storage,
            calculator: StreakCalculator::new(),
            clock,
        }
    }

    /// Upsert the check-in, then recompute the streak from the updated history
    pub async fn record_checkin(&self, command: RecordCheckinCommand) -> Result<RecordCheckinResult> {
        info!("Recording check-in: {:?}", command);

        let record = self.ledger.upsert_checkin(command).await?;
        let streak = self.current_streak(&record.user_id).await?;

        let message = if record.compliant {
            COMPLIANT_MESSAGE
        } else {
            info!("Streak reset for user {} on {}", record.user_id, record.date);
            NON_COMPLIANT_MESSAGE
        };

        Ok(RecordCheckinResult {
            record,
            streak,
            message: message.to_string(),
        })
    }

    /// Today's check-in state and the current streak
    pub async fn status(&self, user_id: &str) -> Result<CheckinStatus> {
        let today = self.clock.today();
        let today_record = self.storage.get_checkin(user_id, today).await?;
        let streak = self.current_streak(user_id).await?;

        Ok(CheckinStatus {
            checked_today: today_record.is_some(),
            compliant_today: today_record.map(|r| r.compliant).unwrap_or(false),
            streak,
        })
    }

    async fn current_streak(&self, user_id: &str) -> Result<u32> {
        let history = self.storage.list_checkins_descending(user_id).await?;
        let streak = self.calculator.compute_streak(&history);
        info!("User {} has {} check-ins, streak {}", user_id, history.len(), streak);
        Ok(streak)
    }
}
