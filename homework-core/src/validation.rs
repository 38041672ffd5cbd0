//! Response validation
//!
//! Checks the decoded status payload against the expected contract before
//! anything downstream looks at it.

use serde_json::Value;

use crate::domain::{CURRENT_DATE_FIELD, HOMEWORKS_FIELD, StatusResponse};
use crate::error::{Failure, Result};

/// Validates a decoded payload and extracts the status response
///
/// Checks run in a fixed order: object, `homeworks` present, `current_date`
/// present, `homeworks` is a list, `current_date` is an integer. Element order
/// is preserved.
pub fn validate(payload: Value) -> Result<StatusResponse> {
    let Value::Object(mut map) = payload else {
        return Err(Failure::NotAnObject);
    };

    let homeworks = map
        .remove(HOMEWORKS_FIELD)
        .ok_or(Failure::missing(HOMEWORKS_FIELD))?;
    let current_date = map
        .remove(CURRENT_DATE_FIELD)
        .ok_or(Failure::missing(CURRENT_DATE_FIELD))?;

    let Value::Array(homeworks) = homeworks else {
        return Err(Failure::wrong_type(HOMEWORKS_FIELD, "списка"));
    };
    let current_date = current_date
        .as_i64()
        .ok_or(Failure::wrong_type(CURRENT_DATE_FIELD, "целого числа"))?;

    Ok(StatusResponse {
        homeworks,
        current_date,
    })
}
