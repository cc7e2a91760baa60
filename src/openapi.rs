use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, DeleteAllResponse, ErrorResponseSchema, HealthResponse,
    UpdateFieldRequest, UpdateFieldResponse, UserPage, UserResponse,
};

/// OpenAPI documentation for the user store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Store API",
        version = "0.1.0",
        description = "CRUD access to the MongoDB user collection.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::get_users,
        crate::handlers::get_all_users,
        crate::handlers::search_users,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::delete_all_users
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateFieldRequest,
            UpdateFieldResponse,
            UserResponse,
            UserPage,
            DeleteAllResponse,
            ErrorResponseSchema,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
