use crate::{
    errors::PlannerError,
    models::{itinerary::ItineraryPatch, trip::TripRequestPayload},
    routes::AppState,
};
use actix_web::{web, HttpResponse};
use std::time::Duration;

/*
    /api/itinerary/generate
    /api/generate-itinerary
*/
pub async fn generate(
    data: web::Data<AppState>,
    input: web::Json<TripRequestPayload>,
) -> Result<HttpResponse, PlannerError> {
    let payload = input.into_inner();
    log::debug!("Generate input: {:?}", payload);

    if data.config.generation_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(data.config.generation_delay_ms)).await;
    }

    match data.itineraries.generate(payload).await {
        Ok(stored) => Ok(HttpResponse::Ok().json(stored)),
        Err(err) => {
            if err.is_validation() {
                log::info!("Rejected trip request: {}", err);
            } else {
                log::error!("Error generating itinerary: {}", err);
            }
            Err(err)
        }
    }
}

/*
    /api/itinerary/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let stored = data.itineraries.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stored))
}

/*
    /api/itinerary/{id} (PUT)
*/
pub async fn update(
    path: web::Path<String>,
    data: web::Data<AppState>,
    input: web::Json<ItineraryPatch>,
) -> Result<HttpResponse, PlannerError> {
    let updated = data
        .itineraries
        .update(&path.into_inner(), input.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/itinerary")
            .route("/generate", web::post().to(generate))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update)),
    )
    .route("/generate-itinerary", web::post().to(generate));
}
