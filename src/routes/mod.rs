pub mod health;
pub mod itinerary;
pub mod pricing;

use actix_cors::Cors;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_web::{error, http::header, web, HttpResponse};
use governor::middleware::NoOpMiddleware;
use serde_json::json;
use std::sync::Arc;
use url::Url;

use crate::config::AppConfig;
use crate::db::ItineraryStore;
use crate::services::itinerary_service::ItineraryService;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: AppConfig,
    pub itineraries: ItineraryService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn ItineraryStore>) -> Self {
        Self {
            config,
            itineraries: ItineraryService::new(store),
        }
    }

    pub fn with_service(config: AppConfig, itineraries: ItineraryService) -> Self {
        Self { config, itineraries }
    }
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(10 * 1024 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::info!("Rejected JSON body: {}", message);
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({ "error": message })),
            )
            .into()
        })
}

/// Browser access is limited to the configured hosts, on any port.
pub fn cors(config: &AppConfig) -> Cors {
    let config = config.clone();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .ok()
                .and_then(origin_host)
                .map(|host| config.is_allowed_origin_host(&host))
                .unwrap_or(false)
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}

fn origin_host(origin: &str) -> Option<String> {
    Url::parse(origin).ok()?.host_str().map(str::to_lowercase)
}

/// Per-client-IP request quota. Build once and share across workers so the
/// counters are global to the server.
pub fn rate_limit(
    config: &AppConfig,
) -> Option<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>> {
    GovernorConfigBuilder::default()
        .per_second(config.rate_limit_replenish_secs)
        .burst_size(config.rate_limit_burst)
        .finish()
}

async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .configure(itinerary::config)
                .configure(pricing::config),
        )
        .default_service(web::to(route_not_found));
}
