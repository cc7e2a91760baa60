use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};

use user_store::config::CONFIG;
use user_store::routes;
use user_store::UserRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Opening MongoDB collection...");
    let repository = UserRepository::new(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    if repository.check_connection().await {
        info!("Connected to MongoDB successfully!");
    } else {
        warn!("MongoDB is not reachable yet; requests will fail until it is");
    }

    let repository = web::Data::new(repository);

    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(repository.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
