use crate::{
    config::AppConfig,
    db::mongo::plans_collection,
    error::EngineError,
    models::travel_plan::TravelPlan,
    services::{plan_editor::PlanEdit, pricing_engine::PricingEngine},
};
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use log::{debug, error};
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use serde_json::json;
use std::sync::Arc;

fn engine_error(err: EngineError) -> HttpResponse {
    error!("Pricing failed: {}", err);
    let kind = if err.is_configuration() {
        "pricing_configuration"
    } else {
        "pricing_failed"
    };
    HttpResponse::InternalServerError().json(json!({ "error": kind, "message": err.to_string() }))
}

fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/*
    /api/plans/price
*/
pub async fn price(engine: web::Data<PricingEngine>, input: web::Json<TravelPlan>) -> impl Responder {
    match engine.price_plan(input.into_inner()) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(err) => engine_error(err),
    }
}

/*
    /api/plans (POST)
*/
pub async fn create(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    engine: web::Data<PricingEngine>,
    input: web::Json<TravelPlan>,
) -> impl Responder {
    let mut plan = match engine.price_plan(input.into_inner()) {
        Ok(plan) => plan,
        Err(err) => return engine_error(err),
    };

    let now = Utc::now();
    plan.id = Some(ObjectId::new());
    plan.created_at = Some(now);
    plan.updated_at = Some(now);

    let collection = plans_collection(&data, &config.database);
    match collection.insert_one(&plan).await {
        Ok(_) => HttpResponse::Created().json(plan),
        Err(err) => {
            error!("Failed to insert plan: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save plan.")
        }
    }
}

/*
    /api/plans (GET)
*/
pub async fn get_all(data: web::Data<Arc<Client>>, config: web::Data<AppConfig>) -> impl Responder {
    let collection = plans_collection(&data, &config.database);

    let cursor = collection
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .limit(100)
        .await;

    match cursor {
        Ok(cursor) => match cursor.try_collect::<Vec<TravelPlan>>().await {
            Ok(plans) => HttpResponse::Ok().json(plans),
            Err(err) => {
                error!("Failed to collect plans: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to process plans.")
            }
        },
        Err(err) => {
            error!("Failed to retrieve plans: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve plans.")
        }
    }
}

/*
    /api/plans/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let collection = plans_collection(&data, &config.database);
    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(plan)) => HttpResponse::Ok().json(plan),
        Ok(None) => HttpResponse::NotFound().body("Plan not found"),
        Err(err) => {
            error!("Failed to retrieve plan: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to retrieve plan")
        }
    }
}

/*
    /api/plans/{id}/edit
*/
pub async fn edit(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    engine: web::Data<PricingEngine>,
    input: web::Json<PlanEdit>,
) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let collection = plans_collection(&data, &config.database);
    let mut plan = match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(plan)) => plan,
        Ok(None) => return HttpResponse::NotFound().body("Plan not found"),
        Err(err) => {
            error!("Failed to retrieve plan: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve plan");
        }
    };

    let edit = input.into_inner();
    debug!("Applying {:?} to plan {}", edit, id);
    if let Err(err) = edit.apply(&mut plan) {
        return HttpResponse::NotFound().json(json!({ "error": err.to_string() }));
    }

    let mut plan = match engine.price_plan(plan) {
        Ok(plan) => plan,
        Err(err) => return engine_error(err),
    };
    plan.updated_at = Some(Utc::now());

    match collection.replace_one(doc! { "_id": id }, &plan).await {
        Ok(_) => HttpResponse::Ok().json(plan),
        Err(err) => {
            error!("Failed to update plan: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save plan.")
        }
    }
}
