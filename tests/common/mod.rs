use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use trip_planner::config::AppConfig;
use trip_planner::db::memory::InMemoryItineraryStore;
use trip_planner::routes::{self, AppState};
use trip_planner::services::itinerary_service::ItineraryService;

pub struct TestApp {
    pub config: AppConfig,
    pub store: Arc<InMemoryItineraryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: Arc::new(InMemoryItineraryStore::new()),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let service = ItineraryService::with_seed(self.store.clone(), 2024);
        let state = web::Data::new(AppState::with_service(self.config.clone(), service));

        App::new()
            .wrap(routes::cors(&self.config))
            .wrap(Logger::default())
            .app_data(state)
            .configure(routes::configure)
    }
}

pub fn paris_request() -> Value {
    json!({
        "destination": "Paris",
        "startDate": "2024-06-01",
        "endDate": "2024-06-04",
        "travelers": 2,
        "budget": 3000,
        "budgetType": "total",
        "travelStyle": "balanced",
        "interests": ["culture", "food"],
        "foodPreferences": ["Local Cuisine"],
        "accommodationType": "hotel"
    })
}
