//! Liveness endpoint backed by the repository's connection check.

use actix_web::{web, HttpResponse};
use log::warn;

use crate::constants::{MSG_SERVER_DEGRADED, MSG_SERVER_HEALTHY};
use crate::models::HealthResponse;
use crate::repositories::UserRepository;

/// Report whether the server can reach its storage
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Storage reachable", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(repository: web::Data<UserRepository>) -> HttpResponse {
    if repository.check_connection().await {
        HttpResponse::Ok().json(HealthResponse {
            status: "OK".to_string(),
            message: MSG_SERVER_HEALTHY.to_string(),
        })
    } else {
        warn!("Health check failed: storage unreachable");
        HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: "UNAVAILABLE".to_string(),
            message: MSG_SERVER_DEGRADED.to_string(),
        })
    }
}
