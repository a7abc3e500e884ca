use serde::{Deserialize, Serialize};

/// A row of `fares.json`: one directed route between canonical stations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FareEntry {
    pub from: String,
    pub to: String,
    /// Regular 2nd class fare
    pub price: f64,
    /// Fare with the one-day saver pass
    pub price_saverday: f64,
    /// Fare with the multi-day travel pass
    pub price_swisstravel: f64,
    /// Travel time in minutes
    pub duration: u32,
    #[serde(default)]
    pub transfers: u32,
}

/// A row of `attractions.json`. The same attraction may appear several
/// times, once per station it can be reached from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AttractionEntry {
    pub name: String,
    pub base: String,
    /// Listed visit duration in minutes
    pub duration: u32,
    pub price: f64,
    #[serde(default)]
    pub price_swisstravel: Option<f64>,
    #[serde(default)]
    pub price_saverday: Option<f64>,
    #[serde(default)]
    pub transportation: Option<String>,
}

/// A row of `pass_prices.json`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PassPriceEntry {
    pub days: u32,
    pub class: String,
    pub price: f64,
}
