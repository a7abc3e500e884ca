use std::path::PathBuf;

use crate::error::ConfigError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE: &str = "Itineraries";

/// Price of a one-day saver pass, in plan currency.
pub const SAVER_DAY_PASS_PRICE: f64 = 52.0;

#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Currency shown in the budget summary
    pub currency: String,
    /// Fare tier label shown in the budget summary
    pub tier_label: String,
    /// Class key used against the pass price table
    pub pass_class: String,
    /// Fixed price of the one-day saver pass
    pub saver_day_pass_price: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "CHF".to_string(),
            tier_label: "2nd class".to_string(),
            pass_class: "second".to_string(),
            saver_day_pass_price: SAVER_DAY_PASS_PRICE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: Option<String>,
    pub database: String,
    pub reference_data_dir: Option<PathBuf>,
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Read settings from the environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT".to_string(),
                value: raw,
            })?,
            None => PORT,
        };

        let saver_day_pass_price = match lookup("SAVER_DAY_PASS_PRICE") {
            Some(raw) => match raw.parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => price,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SAVER_DAY_PASS_PRICE".to_string(),
                        value: raw,
                    })
                }
            },
            None => defaults.saver_day_pass_price,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            mongo_uri: lookup("MONGODB_URI").filter(|uri| !uri.is_empty()),
            database: lookup("MONGODB_DATABASE").unwrap_or_else(|| DATABASE.to_string()),
            reference_data_dir: lookup("REFERENCE_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            pricing: PricingConfig {
                currency: lookup("PRICING_CURRENCY").unwrap_or(defaults.currency),
                tier_label: lookup("PRICING_TIER_LABEL").unwrap_or(defaults.tier_label),
                pass_class: lookup("PRICING_PASS_CLASS").unwrap_or(defaults.pass_class),
                saver_day_pass_price,
            },
        })
    }

    pub fn require_mongo_uri(&self) -> Result<&str, ConfigError> {
        self.mongo_uri
            .as_deref()
            .ok_or_else(|| ConfigError::Missing("MONGODB_URI".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, "Itineraries");
        assert!(config.mongo_uri.is_none());
        assert!(config.reference_data_dir.is_none());
        assert_eq!(config.pricing.currency, "CHF");
        assert_eq!(config.pricing.saver_day_pass_price, 52.0);
        assert!(config.require_mongo_uri().is_err());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("REFERENCE_DATA_DIR", "/srv/fares"),
            ("PRICING_CURRENCY", "EUR"),
            ("SAVER_DAY_PASS_PRICE", "49.5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.require_mongo_uri().unwrap(), "mongodb://localhost:27017");
        assert_eq!(config.reference_data_dir, Some(PathBuf::from("/srv/fares")));
        assert_eq!(config.pricing.currency, "EUR");
        assert_eq!(config.pricing.saver_day_pass_price, 49.5);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn negative_saver_price_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("SAVER_DAY_PASS_PRICE", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
