//! User-related request models.

use mongodb::bson::{to_bson, Bson};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::CODE_BAD_REQUEST;
use crate::errors::ApiError;
use crate::models::User;

/// Request payload for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name (1-100 characters)
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Nikola")]
    pub name: String,
    /// Free-form reference, usually a blog address
    #[validate(length(max = 255, message = "Blog must be at most 255 characters"))]
    #[schema(example = "rubikscode.net")]
    pub blog: Option<String>,
    /// Age in years (0-150)
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(example = 30)]
    pub age: i32,
    /// Location
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    #[schema(example = "Belgrade")]
    pub location: Option<String>,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: None,
            name: req.name,
            blog: req.blog.unwrap_or_default(),
            age: req.age,
            location: req.location.unwrap_or_default(),
            extra: Default::default(),
        }
    }
}

/// Request payload for setting a single field on a user
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFieldRequest {
    /// Name of the field to set; created if absent
    #[schema(example = "location")]
    pub field: String,
    /// New value, any JSON value
    #[schema(value_type = Object, example = "Belgrade")]
    pub value: serde_json::Value,
}

impl UpdateFieldRequest {
    /// Convert the JSON value into its BSON counterpart.
    pub fn bson_value(&self) -> Result<Bson, ApiError> {
        to_bson(&self.value).map_err(|e| ApiError::bad_request(CODE_BAD_REQUEST, e.to_string()))
    }
}

/// Query string for field searches
#[derive(Debug, Deserialize)]
pub struct FieldQuery {
    pub field: String,
    pub value: String,
}

/// Query string for paginated listings
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
