use serde::{Deserialize, Serialize};

use super::money::serialize_currency;

/// One priced unit of a day: a station-to-station hop or an activity's
/// admission.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FareRecord {
    pub day: u32,
    pub from: String,
    pub to: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_swisstravel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_saverday: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "isActivity")]
    pub is_activity: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MissingRoute {
    pub day: u32,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SaverDayRecommendation {
    pub day: u32,
    #[serde(serialize_with = "serialize_currency")]
    pub sum_price: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub sum_price_saverday: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub savings: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DailySummary {
    pub day: u32,
    #[serde(serialize_with = "serialize_currency")]
    pub sum_price: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub sum_price_swisstravel: f64,
}

/// One multi-day pass purchase strategy and what it costs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PassOption {
    pub option: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pass_type: String,
    #[serde(rename = "passCost", serialize_with = "serialize_currency")]
    pub pass_cost: f64,
    #[serde(rename = "totalCost", serialize_with = "serialize_currency")]
    pub total_cost: f64,
    #[serde(rename = "regularCost", serialize_with = "serialize_currency")]
    pub regular_cost: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub savings: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PassRecommendations {
    #[serde(rename = "bestOption")]
    pub best_option: PassOption,
    #[serde(rename = "allOptions")]
    pub all_options: Vec<PassOption>,
    #[serde(rename = "dailySummary")]
    pub daily_summary: Vec<DailySummary>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransportationDetails {
    #[serde(rename = "totalCost")]
    pub total_cost: String,
    pub segments: u32,
    #[serde(rename = "fareDetails")]
    pub fare_details: Vec<FareRecord>,
    #[serde(rename = "missingRoutes")]
    pub missing_routes: Vec<MissingRoute>,
    #[serde(rename = "saverDayRecommendations")]
    pub saver_day_recommendations: Vec<SaverDayRecommendation>,
    #[serde(rename = "swissTravelPassRecommendations")]
    pub swiss_travel_pass_recommendations: PassRecommendations,
}
