//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";

// Field name errors
pub const ERR_FIELD_EMPTY: &str = "field name must not be empty";
pub const ERR_FIELD_OPERATOR: &str = "field name must not start with '$'";
pub const ERR_FIELD_NUL: &str = "field name must not contain a NUL byte";
pub const ERR_FIELD_EMPTY_SEGMENT: &str = "field path must not contain empty segments";
pub const ERR_FIELD_IMMUTABLE_ID: &str = "the '_id' field is immutable";
pub const ERR_EXPECTED_STRING: &str = "a string";
pub const ERR_EXPECTED_INT32: &str = "a 32-bit integer";

// Storage errors
pub const ERR_STORAGE_UNAVAILABLE: &str = "Storage is unavailable";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
