mod config;
mod routes;

use actix_web::{web, App, HttpServer};
use config::HostConfig;
use routes::{configure_routes, cors_policy, Upstream};
use shared::routes::API_PREFIX;
use std::time::Duration;

// Predictions run a model upstream and PDF export renders a document.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(120);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let client = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .map_err(|e| {
            log::error!("Failed to build HTTP client: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    let upstream = Upstream::new(client, config.upstream_url.clone());

    log::info!("Forwarding {} to {}", API_PREFIX, config.upstream_url);
    log::info!("Serving frontend from {}", config.frontend_dir);
    match &config.allowed_origin {
        Some(origin) => log::info!("CORS restricted to {}", origin),
        None => log::warn!("CORS_ALLOWED_ORIGIN not set, accepting any origin"),
    }
    log::info!("Starting server on {}", config.bind_address);

    let frontend_dir = config.frontend_dir.clone();
    let allowed_origin = config.allowed_origin.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_policy(allowed_origin.as_deref()))
            .app_data(web::Data::new(upstream.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
