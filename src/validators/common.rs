//! Common validation utilities and helpers.

use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::constants::{
    CODE_INVALID_USER_ID, CODE_VALIDATION_FAILED, DEFAULT_PAGE_SIZE, ERR_INVALID_USER_ID,
    MAX_PAGE_SIZE,
};
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    errors.sort();
    ApiError::ValidationError {
        code: CODE_VALIDATION_FAILED.to_string(),
        errors,
    }
}

/// Parse a path segment into a user id.
pub fn parse_user_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw)
        .map_err(|_| ApiError::bad_request(CODE_INVALID_USER_ID, ERR_INVALID_USER_ID))
}

/// Resolve the page size requested by a client, applying default and cap.
pub fn clamp_page_size(limit: Option<u64>) -> u64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)
}
