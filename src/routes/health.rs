use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use mongodb::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::services::pricing_engine::PricingEngine;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    client: web::Data<Arc<Client>>,
    engine: web::Data<PricingEngine>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    let reference_result = check_reference_data(&engine);
    health
        .services
        .insert("reference_data".to_string(), reference_result.clone());

    if mongo_result.status != "ok" || reference_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &Client) -> ServiceStatus {
    match client.database("admin").run_command(doc! {"ping": 1}).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: None,
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("MongoDB ping failed: {}", e)),
        },
    }
}

fn check_reference_data(engine: &PricingEngine) -> ServiceStatus {
    let reference = engine.reference();
    match reference
        .pass_prices
        .ensure_complete(&engine.config().pass_class)
    {
        Ok(()) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "{} fares, {} attraction entries",
                reference.fares.len(),
                reference.catalog.len()
            )),
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(e.to_string()),
        },
    }
}
