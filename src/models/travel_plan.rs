use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::fare::TransportationDetails;
use super::money::{deserialize_lenient_price, deserialize_lenient_text};

/// Where an activity's price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Entered by the traveller; never overwritten
    Manual,
    /// Filled from the attraction catalog; recomputed on every run
    Derived,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Station the activity is reached from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(rename = "baseSource", default, skip_serializing_if = "Option::is_none")]
    pub base_source: Option<PriceSource>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_swisstravel: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_saverday: Option<f64>,
    #[serde(
        rename = "priceSource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_source: Option<PriceSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
    #[serde(
        rename = "transportationSource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transportation_source: Option<PriceSource>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
}

impl Activity {
    /// A price counts as manual unless the catalog put it there. An unset
    /// price is never manual.
    pub fn has_manual_price(&self) -> bool {
        self.price.is_some() && self.price_source != Some(PriceSource::Derived)
    }

    pub fn clear_derived_price(&mut self) {
        self.price = None;
        self.price_swisstravel = None;
        self.price_saverday = None;
        self.price_source = None;
        self.clear_catalog_fields();
    }

    /// Drop `base` and `transportation` if the catalog filled them in, so
    /// only what the traveller entered steers the next selection.
    pub fn clear_catalog_fields(&mut self) {
        if self.base_source == Some(PriceSource::Derived) {
            self.base = None;
            self.base_source = None;
        }
        if self.transportation_source == Some(PriceSource::Derived) {
            self.transportation = None;
            self.transportation_source = None;
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Day {
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(rename = "In", default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(rename = "Out", default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(
        rename = "transportCost",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_cost: Option<String>,
}

impl Day {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BudgetBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
    /// Budget lines owned by the UI (lodging, food, ...), passed through untouched
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TravelPlan {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "startingCity", default)]
    pub starting_city: String,
    #[serde(rename = "endingCity", default)]
    pub ending_city: String,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(
        rename = "transportationDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transportation_details: Option<TransportationDetails>,
    #[serde(rename = "budgetBreakdown", default)]
    pub budget_breakdown: BudgetBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TravelPlan {
    pub fn day(&self, day: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}
