//! User-related response models.

use mongodb::bson::Bson;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "Nikola")]
    pub name: String,
    #[schema(example = "rubikscode.net")]
    pub blog: String,
    #[schema(example = 30)]
    pub age: i32,
    #[schema(example = "Belgrade")]
    pub location: String,
    /// Fields added after creation
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let extra = match Bson::Document(user.extra).into_relaxed_extjson() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            blog: user.blog,
            age: user.age,
            location: user.location,
            extra,
        }
    }
}

/// One page of users
#[derive(Debug, Serialize, ToSchema)]
pub struct UserPage {
    /// Whether the request was successful
    pub success: bool,
    /// Users on this page
    pub data: Vec<UserResponse>,
    /// Number of records skipped
    pub skip: u64,
    /// Maximum page size requested
    pub limit: u64,
    /// Number of records on this page
    pub count: usize,
}

/// Result of a single-field update
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateFieldResponse {
    /// Whether the stored value changed
    #[schema(example = true)]
    pub modified: bool,
}

/// Result of a bulk delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAllResponse {
    /// Number of removed users
    #[schema(example = 2)]
    pub deleted: u64,
}
