mod api;
mod config;
mod database;
mod models;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{AppConfig, StoreBackend};
use dotenv::dotenv;
use std::sync::Arc;
use store::{InMemoryUserStore, MongoUserStore, UserStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting Users Service...");

    let store: Arc<dyn UserStore> = match config.store_backend {
        StoreBackend::Mongo => {
            log::info!(
                "📊 Database: {} / {}",
                config.database_name,
                config.users_collection
            );

            let db = database::MongoDB::new(&config.database_url, &config.database_name)
                .await
                .map_err(|e| {
                    std::io::Error::other(format!("Failed to connect to MongoDB: {}", e))
                })?;

            log::info!("✅ MongoDB connected successfully");

            db.ensure_collection(&config.users_collection)
                .await
                .map_err(|e| {
                    std::io::Error::other(format!("Failed to prepare collection: {}", e))
                })?;

            Arc::new(MongoUserStore::new(&db, &config.users_collection))
        }
        StoreBackend::Memory => {
            log::warn!("⚠️  USER_STORE=memory: users are kept in process memory only");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let store_data: web::Data<dyn UserStore> = web::Data::from(store);
    let cors_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}", config.bind_addr());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_addr());

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
