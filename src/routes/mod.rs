use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(handlers::health_check))
            // OpenAPI document
            .route("/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/users")
                    // Fixed paths must be registered before /{id}
                    .route("/all", web::get().to(handlers::get_all_users))
                    .route("/search", web::get().to(handlers::search_users))
                    .route("", web::get().to(handlers::get_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("", web::delete().to(handlers::delete_all_users))
                    .route("/{id}", web::patch().to(handlers::update_user))
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            ),
    );
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
