// handlers/validate.rs - Request field checks shared by the handlers

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::types::RecordId;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").unwrap());

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Fail with "<label> field is missing" when `value` is empty
pub fn require(label: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::bad_request(format!("{} field is missing", label)));
    }
    Ok(())
}

/// Lowercase-only pattern: mixed case addresses are rejected, not folded
pub fn email(value: &str) -> Result<(), ApiError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ApiError::bad_request("Provided email address is malformed"));
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), ApiError> {
    if value.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Password length can't be smaller than {}",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Parse a path segment as an unsigned id that fits the storage key type
pub fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    raw.parse::<u32>()
        .ok()
        .and_then(|id| RecordId::try_from(id).ok())
        .ok_or_else(|| ApiError::bad_request("Provided ID can't be parsed as an integer"))
}

/// Body ids decode as `u32` with 0 standing for "absent"
pub fn body_id(raw: u32) -> Result<RecordId, ApiError> {
    if raw == 0 {
        return Err(ApiError::bad_request("ID field is missing"));
    }
    RecordId::try_from(raw).map_err(|_| ApiError::bad_request("Provided ID can't be parsed as an integer"))
}
