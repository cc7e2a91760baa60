//! Data-access layer for a MongoDB `users` collection, with a thin REST
//! front end.
//!
//! [`UserRepository`] is the core: each of its methods maps to one driver
//! call. The `handlers`/`routes` modules expose it over actix-web.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod validators;

pub use errors::{ApiError, RepositoryError};
pub use models::User;
pub use repositories::UserRepository;
