//! Input checks shared by the services.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::error::AppError;

/// Maximum length of an employee identifier, in characters.
pub const MAX_EMPLOYEE_ID_LEN: usize = 64;

/// Rejects blank or oversized employee identifiers.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the identifier is empty after trimming
/// or longer than [`MAX_EMPLOYEE_ID_LEN`].
pub fn validate_employee_id(employee_id: &str) -> Result<(), AppError> {
    if employee_id.trim().is_empty() {
        return Err(AppError::bad_request(
            "Employee id must not be empty",
            json!({ "field": "employee_id" }),
        ));
    }

    if employee_id.chars().count() > MAX_EMPLOYEE_ID_LEN {
        return Err(AppError::bad_request(
            "Employee id is too long",
            json!({ "field": "employee_id", "max": MAX_EMPLOYEE_ID_LEN }),
        ));
    }

    Ok(())
}

/// Rejects a leave period that ends before it starts.
pub fn validate_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if end_date < start_date {
        return Err(AppError::bad_request(
            "Leave period ends before it starts",
            json!({ "start_date": start_date, "end_date": end_date }),
        ));
    }

    Ok(())
}

/// Rejects a checkout earlier than its check-in.
pub fn validate_shift(
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let Some(check_out) = check_out
        && check_out < check_in
    {
        return Err(AppError::bad_request(
            "Check-out precedes check-in",
            json!({ "check_in": check_in, "check_out": check_out }),
        ));
    }

    Ok(())
}
