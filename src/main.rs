use std::sync::Arc;

use actix_governor::Governor;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner::{
    config::AppConfig,
    db::{self, memory::InMemoryItineraryStore, mongo::MongoItineraryStore, ItineraryStore},
    routes::{self, AppState},
};

async fn build_store(config: &AppConfig) -> Arc<dyn ItineraryStore> {
    let Some(uri) = config.mongo_uri.as_deref() else {
        log::info!("MONGODB_URI not set, keeping itineraries in memory");
        return Arc::new(InMemoryItineraryStore::new());
    };

    match db::mongo::create_mongo_client(uri).await {
        Ok(client) => {
            log::info!("MongoDB connection established");
            Arc::new(MongoItineraryStore::new(
                client,
                &config.mongo_database,
                &config.itinerary_collection,
            ))
        }
        Err(e) => {
            log::error!("MongoDB unavailable ({}), falling back to in-memory store", e);
            Arc::new(InMemoryItineraryStore::new())
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    let store = build_store(&config).await;
    let state = web::Data::new(AppState::new(config.clone(), store));

    log::info!("Attempting to bind to {}:{}", config.host, config.port);

    let governor_conf = routes::rate_limit(&config).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "rate limit burst and replenish interval must be positive",
        )
    })?;

    let cors_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(routes::cors(&cors_config))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
