//! Error code constants for API responses.
//!
//! These codes give API clients a machine-readable identifier for each
//! error type.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_FIELD_NAME: &str = "INVALID_FIELD_NAME";
pub const CODE_INVALID_FIELD_VALUE: &str = "INVALID_FIELD_VALUE";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_INVALID_USER_ID: &str = "INVALID_USER_ID";

// Storage errors
pub const CODE_STORAGE_UNAVAILABLE: &str = "STORAGE_UNAVAILABLE";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
