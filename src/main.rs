use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use itinerary_pricing_api::{
    config::AppConfig,
    db,
    routes,
    services::{pricing_engine::PricingEngine, reference_data::ReferenceData},
};

fn startup_error<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(startup_error)?;

    let reference = match &config.reference_data_dir {
        Some(dir) => ReferenceData::load_dir(dir),
        None => {
            warn!("REFERENCE_DATA_DIR not set, using bundled reference data");
            ReferenceData::bundled()
        }
    }
    .map_err(startup_error)?;

    // Refuse to start with a pass table that would fail every pricing run
    reference
        .pass_prices
        .ensure_complete(&config.pricing.pass_class)
        .map_err(startup_error)?;

    let engine = PricingEngine::new(Arc::new(reference), config.pricing.clone());

    let mongo_uri = config.require_mongo_uri().map_err(startup_error)?;
    let client = db::mongo::create_mongo_client(mongo_uri)
        .await
        .map_err(startup_error)?;

    let host = config.host.clone();
    let port = config.port;
    info!("Starting HTTP server on {}:{}", host, port);

    let engine = web::Data::new(engine);
    let client = web::Data::new(client);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(engine.clone())
            .app_data(client.clone())
            .app_data(config.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .configure(routes::configure_pricing)
                    .configure(routes::configure_persistence),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
