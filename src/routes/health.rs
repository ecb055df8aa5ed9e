use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::routes::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    timestamp: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let store_result = check_store(&data).await;
    health.services.insert("store".to_string(), store_result.clone());

    // Any failing service marks the whole API as degraded
    if store_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_store(data: &web::Data<AppState>) -> ServiceStatus {
    let store = data.itineraries.store();
    match store.ping().await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Itinerary store ({}) reachable", store.backend())),
        },
        Err(e) => {
            log::error!("Itinerary store health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Itinerary store ({}) unavailable: {}", store.backend(), e)),
            }
        }
    }
}
