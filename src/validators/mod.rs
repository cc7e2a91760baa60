//! Validation helpers for caller-supplied input.

pub mod common;
pub mod field;

pub use common::*;
pub use field::*;
