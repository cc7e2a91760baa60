//! Field-name validation for dynamically built filters and updates.
//!
//! Field names arrive as bare strings and are placed verbatim as keys of a
//! filter or `$set` document, so anything the server would read as an
//! operator or a malformed path is rejected before a round trip. Values
//! written to the fields [`User`](crate::models::User) reads with a fixed
//! type must keep that type, or the document could no longer be loaded.

use mongodb::bson::Bson;

use crate::constants::{
    ERR_EXPECTED_INT32, ERR_EXPECTED_STRING, ERR_FIELD_EMPTY, ERR_FIELD_EMPTY_SEGMENT,
    ERR_FIELD_IMMUTABLE_ID, ERR_FIELD_NUL, ERR_FIELD_OPERATOR,
};
use crate::errors::RepositoryError;

const ID_FIELD: &str = "_id";

fn invalid(field: &str, reason: &'static str) -> RepositoryError {
    RepositoryError::InvalidFieldName {
        field: field.to_string(),
        reason,
    }
}

/// Validate a field name (or dotted path) used as a filter key.
pub fn validate_field_name(field: &str) -> Result<(), RepositoryError> {
    if field.is_empty() {
        return Err(invalid(field, ERR_FIELD_EMPTY));
    }
    if field.contains('\0') {
        return Err(invalid(field, ERR_FIELD_NUL));
    }
    if field.split('.').any(|segment| segment.starts_with('$')) {
        return Err(invalid(field, ERR_FIELD_OPERATOR));
    }
    if field.split('.').any(str::is_empty) {
        return Err(invalid(field, ERR_FIELD_EMPTY_SEGMENT));
    }
    Ok(())
}

/// Validate a field name used as a `$set` target.
///
/// Same rules as [`validate_field_name`], and `_id` may not be written.
pub fn validate_update_field(field: &str) -> Result<(), RepositoryError> {
    validate_field_name(field)?;
    if field == ID_FIELD || field.starts_with("_id.") {
        return Err(invalid(field, ERR_FIELD_IMMUTABLE_ID));
    }
    Ok(())
}

/// Check a `$set` value against the type of the typed user fields.
///
/// `age` is stored as Int32; an Int64 in range is narrowed. Any other field
/// accepts any value.
pub fn validate_field_value(field: &str, value: Bson) -> Result<Bson, RepositoryError> {
    let mismatch = |expected| RepositoryError::InvalidFieldValue {
        field: field.to_string(),
        expected,
    };

    match field {
        "name" | "blog" | "location" => match value {
            Bson::String(_) => Ok(value),
            _ => Err(mismatch(ERR_EXPECTED_STRING)),
        },
        "age" => match value {
            Bson::Int32(_) => Ok(value),
            Bson::Int64(age) => i32::try_from(age)
                .map(Bson::Int32)
                .map_err(|_| mismatch(ERR_EXPECTED_INT32)),
            _ => Err(mismatch(ERR_EXPECTED_INT32)),
        },
        _ => Ok(value),
    }
}
