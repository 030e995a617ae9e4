//! Translation of domain failures into JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;

use crate::backend::domain::models::budget::BudgetConfigError;
use crate::backend::domain::models::checkin::CheckinValidationError;
use crate::backend::domain::models::expense::ExpenseValidationError;

/// Validation failures are the caller's fault; everything else is ours.
pub fn status_for(error: &anyhow::Error) -> StatusCode {
    if error.downcast_ref::<ExpenseValidationError>().is_some()
        || error.downcast_ref::<CheckinValidationError>().is_some()
        || error.downcast_ref::<BudgetConfigError>().is_some()
    {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Internal error details stay in the log, not in the response body
pub fn domain_error_response(error: &anyhow::Error) -> Response {
    let status = status_for(error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error_response(status, "Internal server error")
    } else {
        error_response(status, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let error = anyhow::Error::from(ExpenseValidationError::AmountNotPositive(0));
        assert_eq!(status_for(&error), StatusCode::BAD_REQUEST);

        let error = anyhow::Error::from(BudgetConfigError::ThresholdAboveLimit {
            warning_threshold: 2,
            monthly_limit: 1,
        });
        assert_eq!(status_for(&error), StatusCode::BAD_REQUEST);

        let error = anyhow::Error::from(CheckinValidationError::InvalidDate("x".to_string()));
        assert_eq!(status_for(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_map_to_internal_error() {
        let error = anyhow::anyhow!("database is locked");
        assert_eq!(status_for(&error), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
