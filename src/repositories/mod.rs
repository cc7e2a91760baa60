//! Repository layer for database operations.

pub mod user_repository;

pub use user_repository::{FieldUpdate, UserRepository};
