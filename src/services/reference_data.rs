use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::error::EngineError;
use crate::models::reference::{AttractionEntry, FareEntry, PassPriceEntry};
use crate::services::activity_enricher::AttractionCatalog;
use crate::services::fare_lookup::FareTable;
use crate::services::location_normalizer::LocationNormalizer;
use crate::services::pass_optimizer::PassPriceTable;

const ALIASES_FILE: &str = "aliases.json";
const FARES_FILE: &str = "fares.json";
const ATTRACTIONS_FILE: &str = "attractions.json";
const PASS_PRICES_FILE: &str = "pass_prices.json";

const BUNDLED_ALIASES: &str = include_str!("../../data/aliases.json");
const BUNDLED_FARES: &str = include_str!("../../data/fares.json");
const BUNDLED_ATTRACTIONS: &str = include_str!("../../data/attractions.json");
const BUNDLED_PASS_PRICES: &str = include_str!("../../data/pass_prices.json");

/// Read-only tables the pricing engine works from. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub normalizer: LocationNormalizer,
    pub fares: FareTable,
    pub catalog: AttractionCatalog,
    pub pass_prices: PassPriceTable,
}

fn parse<T: DeserializeOwned>(file: &str, content: &str) -> Result<T, EngineError> {
    serde_json::from_str(content).map_err(|e| EngineError::ReferenceData {
        file: file.to_string(),
        message: e.to_string(),
    })
}

impl ReferenceData {
    /// Tables compiled into the binary from `data/`.
    pub fn bundled() -> Result<Self, EngineError> {
        Self::from_json(
            Some(BUNDLED_ALIASES),
            BUNDLED_FARES,
            BUNDLED_ATTRACTIONS,
            BUNDLED_PASS_PRICES,
        )
    }

    /// Load from a directory holding the four JSON files. `aliases.json` is
    /// optional.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, EngineError> {
        let dir = dir.as_ref();
        let read = |file: &str| -> Result<String, EngineError> {
            std::fs::read_to_string(dir.join(file)).map_err(|e| EngineError::ReferenceData {
                file: dir.join(file).display().to_string(),
                message: e.to_string(),
            })
        };

        let aliases_path = dir.join(ALIASES_FILE);
        let aliases = if aliases_path.exists() {
            Some(read(ALIASES_FILE)?)
        } else {
            None
        };

        let data = Self::from_json(
            aliases.as_deref(),
            &read(FARES_FILE)?,
            &read(ATTRACTIONS_FILE)?,
            &read(PASS_PRICES_FILE)?,
        )?;
        info!("Loaded reference data from {}", dir.display());
        Ok(data)
    }

    pub fn from_json(
        aliases: Option<&str>,
        fares: &str,
        attractions: &str,
        pass_prices: &str,
    ) -> Result<Self, EngineError> {
        let aliases: HashMap<String, String> = match aliases {
            Some(content) => parse(ALIASES_FILE, content)?,
            None => HashMap::new(),
        };
        let fares: Vec<FareEntry> = parse(FARES_FILE, fares)?;
        let attractions: Vec<AttractionEntry> = parse(ATTRACTIONS_FILE, attractions)?;
        let pass_prices: Vec<PassPriceEntry> = parse(PASS_PRICES_FILE, pass_prices)?;

        let data = Self {
            normalizer: LocationNormalizer::with_aliases(aliases),
            fares: FareTable::from_entries(fares),
            catalog: AttractionCatalog::from_entries(attractions),
            pass_prices: PassPriceTable::from_entries(
                pass_prices.into_iter().map(|p| (p.days, p.class, p.price)),
            ),
        };
        info!(
            "Reference data: {} aliases, {} fares, {} attraction entries, {} pass prices",
            data.normalizer.len(),
            data.fares.len(),
            data.catalog.len(),
            data.pass_prices.len()
        );
        Ok(data)
    }
}
