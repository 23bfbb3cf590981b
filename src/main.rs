mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::Recommender;
use crate::routes::recommend::AppState;
use crate::services::CatalogStore;
use std::sync::Arc;
use tracing::{info, warn};

/// JSON error response for malformed payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string()))
    }
}

/// Handle JSON payload errors (bad syntax, wrong parameter types)
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration first so the logging section can drive the
    // subscriber; no tracing exists yet, so failures go to stderr.
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging from [logging], with LOG_LEVEL / LOG_FORMAT env
    // vars as overrides
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting wisata-rec recommendation service...");
    info!("Configuration loaded successfully");

    // Load the catalog and similarity matrix. A load failure is not fatal:
    // the service keeps running on an empty catalog and every recommend
    // call answers not-found until the data files are fixed.
    let catalog = match services::load_catalog(&settings.data.catalog_path, &settings.data.matrix_path) {
        Ok(catalog) => {
            info!("Catalog loaded: {} places", catalog.len());
            Arc::new(catalog)
        }
        Err(e) => {
            warn!("Failed to load data ({}), running with an empty catalog", e);
            Arc::new(CatalogStore::empty())
        }
    };

    let engine = Recommender::new(Arc::clone(&catalog));

    // Build application state
    let app_state = AppState {
        engine,
        recommend: settings.recommend.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
