use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::services::pricing_engine::PricingEngine;

#[derive(serde::Deserialize)]
pub struct FareQuery {
    from: String,
    to: String,
}

/*
    /api/reference/stations/{name}
*/
pub async fn normalize_station(
    path: web::Path<String>,
    engine: web::Data<PricingEngine>,
) -> impl Responder {
    let name = path.into_inner();
    let station = engine.reference().normalizer.normalize(&name);
    HttpResponse::Ok().json(json!({
        "name": name,
        "station": station,
        "aliased": station != name,
    }))
}

/*
    /api/reference/fares?from=..&to=..
*/
pub async fn get_fare(
    engine: web::Data<PricingEngine>,
    params: web::Query<FareQuery>,
) -> impl Responder {
    let reference = engine.reference();
    let from = reference.normalizer.normalize(&params.from);
    let to = reference.normalizer.normalize(&params.to);

    match reference.fares.lookup(&from, &to) {
        Some(fare) => HttpResponse::Ok().json(fare),
        None => HttpResponse::NotFound().json(json!({
            "error": "Fare unavailable for this leg",
            "from": from,
            "to": to,
        })),
    }
}
