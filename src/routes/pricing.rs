use crate::{
    errors::PlannerError, models::pricing::PricingRequest,
    services::pricing_service::PricingService,
};
use actix_web::{web, HttpResponse, Responder};

/*
    /api/pricing/calculate
*/
pub async fn calculate(input: web::Json<PricingRequest>) -> Result<HttpResponse, PlannerError> {
    let quote = PricingService::quote_request(&input)?;
    Ok(HttpResponse::Ok().json(quote))
}

/*
    /api/pricing/tiers
*/
pub async fn tiers() -> impl Responder {
    HttpResponse::Ok().json(PricingService::tiers())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pricing")
            .route("/calculate", web::post().to(calculate))
            .route("/tiers", web::get().to(tiers)),
    );
}
