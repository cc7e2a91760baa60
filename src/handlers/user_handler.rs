//! User handlers. Each one forwards to a single repository operation.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{
    CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND, MSG_USERS_DELETED, MSG_USERS_FOUND,
    MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_UNCHANGED, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, CreateUserRequest, DeleteAllResponse, FieldQuery, PageQuery,
    UpdateFieldRequest, UpdateFieldResponse, User, UserPage, UserResponse,
};
use crate::repositories::{FieldUpdate, UserRepository};
use crate::validators::{clamp_page_size, parse_user_id, validation_errors_to_api_error};

fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

/// List users one page at a time
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Page size (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of users", body = UserPage),
        (status = 503, description = "Storage unavailable", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn get_users(
    repository: web::Data<UserRepository>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = clamp_page_size(query.limit);

    let users = repository.get_users(skip, limit).await?;
    let data = to_responses(users);

    Ok(HttpResponse::Ok().json(UserPage {
        success: true,
        count: data.len(),
        data,
        skip,
        limit,
    }))
}

/// List every stored user
#[utoipa::path(
    get,
    path = "/api/users/all",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "Storage unavailable", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn get_all_users(
    repository: web::Data<UserRepository>,
) -> Result<HttpResponse, ApiError> {
    let users = repository.get_all_users().await?;
    debug!("Fetched {} users", users.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USERS_FOUND, to_responses(users))))
}

/// Find users whose field equals a value
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "Users",
    params(
        ("field" = String, Query, description = "Field name to match"),
        ("value" = String, Query, description = "Value to compare against")
    ),
    responses(
        (status = 200, description = "Matching users", body = [UserResponse]),
        (status = 400, description = "Invalid field name", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn search_users(
    repository: web::Data<UserRepository>,
    query: web::Query<FieldQuery>,
) -> Result<HttpResponse, ApiError> {
    let FieldQuery { field, value } = query.into_inner();
    let users = repository.get_users_by_field(&field, &value).await?;
    debug!("Field '{}' matched {} users", field, users.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USERS_FOUND, to_responses(users))))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn create_user(
    repository: web::Data<UserRepository>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        warn!("Validation failed for create user: {}", e);
        validation_errors_to_api_error(e)
    })?;

    let mut user: User = body.into_inner().into();
    repository.insert_user(&mut user).await?;

    info!("Created user {:?}", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_USER_CREATED,
        UserResponse::from(user),
    )))
}

/// Set a single field on a user
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateFieldRequest,
    responses(
        (status = 200, description = "User updated or already up to date", body = UpdateFieldResponse),
        (status = 400, description = "Invalid id, field name or value", body = crate::models::ErrorResponseSchema),
        (status = 404, description = "User not found", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn update_user(
    repository: web::Data<UserRepository>,
    path: web::Path<String>,
    body: web::Json<UpdateFieldRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;
    let value = body.bson_value()?;

    let outcome = repository.set_field(&id, &body.field, value).await?;
    if !outcome.matched {
        warn!("User not found for update: {}", id);
    }
    update_response(outcome)
}

fn update_response(outcome: FieldUpdate) -> Result<HttpResponse, ApiError> {
    if !outcome.matched {
        return Err(ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND));
    }

    let message = if outcome.modified {
        MSG_USER_UPDATED
    } else {
        MSG_USER_UNCHANGED
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        message,
        UpdateFieldResponse {
            modified: outcome.modified,
        },
    )))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Invalid id", body = crate::models::ErrorResponseSchema),
        (status = 404, description = "User not found", body = crate::models::ErrorResponseSchema)
    )
)]
pub async fn delete_user(
    repository: web::Data<UserRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;

    if !repository.delete_user_by_id(&id).await? {
        warn!("User not found for deletion: {}", id);
        return Err(ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_USER_DELETED)))
}

/// Delete every user
#[utoipa::path(
    delete,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Users deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_users(
    repository: web::Data<UserRepository>,
) -> Result<HttpResponse, ApiError> {
    let deleted = repository.delete_all_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_USERS_DELETED,
        DeleteAllResponse { deleted },
    )))
}
