use actix_web::web;

pub mod health;
pub mod plans;
pub mod reference;

/// Routes that only need the pricing engine.
pub fn configure_pricing(cfg: &mut web::ServiceConfig) {
    cfg.route("/plans/price", web::post().to(plans::price))
        .service(
            web::scope("/reference")
                .route(
                    "/stations/{name}",
                    web::get().to(reference::normalize_station),
                )
                .route("/fares", web::get().to(reference::get_fare)),
        );
}

/// Routes backed by the plan collection in MongoDB.
pub fn configure_persistence(cfg: &mut web::ServiceConfig) {
    cfg.route("/plans", web::get().to(plans::get_all))
        .route("/plans", web::post().to(plans::create))
        .route("/plans/{id}", web::get().to(plans::get_by_id))
        .route("/plans/{id}/edit", web::post().to(plans::edit));
}
