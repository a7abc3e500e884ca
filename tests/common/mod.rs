use actix_web::{web, App};
use std::sync::Arc;

use itinerary_pricing_api::{
    config::PricingConfig,
    models::travel_plan::{Activity, Day, TravelPlan},
    routes,
    services::{pricing_engine::PricingEngine, reference_data::ReferenceData},
};

const FARES: &str = r#"[
    {"from": "S", "to": "A", "price": 20, "price_saverday": 0, "price_swisstravel": 0, "duration": 30},
    {"from": "A", "to": "B", "price": 40, "price_saverday": 0, "price_swisstravel": 0, "duration": 50},
    {"from": "B", "to": "C", "price": 35, "price_saverday": 0, "price_swisstravel": 0, "duration": 45},
    {"from": "C", "to": "E", "price": 25, "price_saverday": 0, "price_swisstravel": 0, "duration": 35},
    {"from": "A", "to": "Peak Station", "price": 30, "price_saverday": 0, "price_swisstravel": 15, "duration": 40},
    {"from": "Peak Station", "to": "A", "price": 30, "price_saverday": 0, "price_swisstravel": 15, "duration": 40}
]"#;

const ATTRACTIONS: &str = r#"[
    {"name": "Summit", "base": "Peak Station", "duration": 180, "price": 90, "price_swisstravel": 45, "price_saverday": 45, "transportation": "Cable car"},
    {"name": "Summit", "base": "B", "duration": 240, "price": 120, "price_swisstravel": 60, "price_saverday": 60},
    {"name": "Museum", "base": "C", "duration": 90, "price": 18}
]"#;

const PASS_PRICES: &str = r#"[
    {"days": 3, "class": "second", "price": 244},
    {"days": 4, "class": "second", "price": 295},
    {"days": 6, "class": "second", "price": 379},
    {"days": 8, "class": "second", "price": 419},
    {"days": 15, "class": "second", "price": 459}
]"#;

const ALIASES: &str = r#"{"Alpha Town": "A", "Start City": "S"}"#;

pub fn fixture_reference() -> ReferenceData {
    ReferenceData::from_json(Some(ALIASES), FARES, ATTRACTIONS, PASS_PRICES)
        .expect("fixture reference data parses")
}

pub fn fixture_engine() -> PricingEngine {
    PricingEngine::new(Arc::new(fixture_reference()), PricingConfig::default())
}

pub fn activity(title: &str, location: &str, base: Option<&str>) -> Activity {
    Activity {
        title: title.to_string(),
        location: Some(location.to_string()),
        base: base.map(str::to_string),
        ..Default::default()
    }
}

/// Four days S -> A -> B -> C -> E with accommodations A, B, C, D.
pub fn four_day_plan() -> TravelPlan {
    TravelPlan {
        starting_city: "S".to_string(),
        ending_city: "E".to_string(),
        days: ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, acc)| Day {
                day: i as u32 + 1,
                accommodation: Some(acc.to_string()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn create_app(
    engine: PricingEngine,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(engine))
        .service(web::scope("/api").configure(routes::configure_pricing))
}
