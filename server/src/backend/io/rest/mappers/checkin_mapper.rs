use shared::{CheckinRequest, CheckinResponse, StreakStatusResponse};

use crate::backend::domain::checkin_ledger::CheckinLedger;
use crate::backend::domain::clock::{format_iso_date, parse_iso_date};
use crate::backend::domain::commands::checkin::{CheckinStatus, RecordCheckinCommand, RecordCheckinResult};
use crate::backend::domain::models::checkin::{CheckinRecord, CheckinValidationError};

pub struct CheckinMapper;

impl CheckinMapper {
    /// Convert a check-in request into a domain command. A present but
    /// unparseable date is rejected; the compliant flag is coerced.
    pub fn to_command(
        user_id: String,
        request: CheckinRequest,
    ) -> Result<RecordCheckinCommand, CheckinValidationError> {
        let date = match request.date {
            Some(raw) => Some(parse_iso_date(&raw).ok_or(CheckinValidationError::InvalidDate(raw))?),
            None => None,
        };

        Ok(RecordCheckinCommand {
            user_id,
            date,
            compliant: Some(CheckinLedger::coerce_compliant(request.compliant.as_ref())),
        })
    }

    pub fn to_dto(record: CheckinRecord) -> shared::CheckinRecord {
        shared::CheckinRecord {
            date: format_iso_date(record.date),
            compliant: record.compliant,
        }
    }

    pub fn to_checkin_response(result: RecordCheckinResult) -> CheckinResponse {
        CheckinResponse {
            record: Self::to_dto(result.record),
            streak: result.streak,
            message: result.message,
        }
    }

    pub fn to_status_response(status: CheckinStatus) -> StreakStatusResponse {
        StreakStatusResponse {
            checked_today: status.checked_today,
            compliant_today: status.compliant_today,
            streak: status.streak,
        }
    }
}
