//! Application constants module.
//!
//! Centralizes the fixed database identifiers, error and success messages,
//! error codes and pagination defaults used throughout the crate.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
