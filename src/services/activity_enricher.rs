//! Fills missing activity prices from the attraction catalog.
//!
//! An attraction can be listed several times, once per station it is reached
//! from. When an activity matches such a name the entry is chosen in this
//! order:
//!
//! 1. the entry anchored at the activity's own `base`
//! 2. the entry anchored at the day's `In` station
//! 3. the entry anchored at the day's `Out` station
//! 4. the entry with the shortest listed duration (earliest listed on ties)
//!
//! Station comparisons go through the [`LocationNormalizer`], so "Interlaken"
//! and "Interlaken Ost" count as the same anchor. A `base` or `transportation`
//! copied from the catalog is tagged as derived and dropped before the next
//! selection; only a traveller-entered `base` counts as the activity's own.

use std::collections::HashMap;

use log::debug;

use crate::models::reference::AttractionEntry;
use crate::models::travel_plan::{Activity, Day, PriceSource};
use crate::services::location_normalizer::LocationNormalizer;

/// Attraction entries grouped by place name, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct AttractionCatalog {
    by_name: HashMap<String, Vec<AttractionEntry>>,
}

impl AttractionCatalog {
    pub fn from_entries(entries: Vec<AttractionEntry>) -> Self {
        let mut by_name: HashMap<String, Vec<AttractionEntry>> = HashMap::new();
        for entry in entries {
            by_name.entry(entry.name.clone()).or_default().push(entry);
        }
        Self { by_name }
    }

    pub fn candidates(&self, name: &str) -> &[AttractionEntry] {
        self.by_name
            .get(name.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

pub struct ActivityEnricher<'a> {
    catalog: &'a AttractionCatalog,
    normalizer: &'a LocationNormalizer,
}

impl<'a> ActivityEnricher<'a> {
    pub fn new(catalog: &'a AttractionCatalog, normalizer: &'a LocationNormalizer) -> Self {
        Self {
            catalog,
            normalizer,
        }
    }

    /// Enrich every activity of `day`. `In`/`Out` must already be derived.
    pub fn enrich_day(&self, day: &mut Day) {
        let entry = day.entry.clone();
        let exit = day.exit.clone();
        for activity in day.activities.iter_mut() {
            self.enrich_activity(activity, entry.as_deref(), exit.as_deref());
        }
    }

    pub fn enrich_activity(&self, activity: &mut Activity, day_in: Option<&str>, day_out: Option<&str>) {
        activity.clear_catalog_fields();

        if activity.has_manual_price() {
            activity.price_source = Some(PriceSource::Manual);
            return;
        }

        let selected = activity.location.as_deref().and_then(|location| {
            self.select_entry(self.catalog.candidates(location), activity, day_in, day_out)
        });

        match selected {
            Some(entry) => {
                activity.price = Some(entry.price);
                activity.price_swisstravel = entry.price_swisstravel;
                activity.price_saverday = entry.price_saverday;
                activity.price_source = Some(PriceSource::Derived);
                if activity.transportation.is_none() && entry.transportation.is_some() {
                    activity.transportation = entry.transportation.clone();
                    activity.transportation_source = Some(PriceSource::Derived);
                }
                if activity.base.is_none() {
                    activity.base = Some(entry.base.clone());
                    activity.base_source = Some(PriceSource::Derived);
                }
            }
            None => {
                if activity.price_source == Some(PriceSource::Derived) {
                    debug!(
                        "'{}' no longer matches the catalog, dropping derived price",
                        activity.title
                    );
                    activity.clear_derived_price();
                }
            }
        }
    }

    fn select_entry<'c>(
        &self,
        candidates: &'c [AttractionEntry],
        activity: &Activity,
        day_in: Option<&str>,
        day_out: Option<&str>,
    ) -> Option<&'c AttractionEntry> {
        if candidates.len() <= 1 {
            return candidates.first();
        }

        let anchored_at = |station: Option<&str>| {
            let station = self.normalizer.normalize(station?);
            candidates
                .iter()
                .find(|entry| self.normalizer.normalize(&entry.base) == station)
        };

        anchored_at(activity.base.as_deref())
            .or_else(|| anchored_at(day_in))
            .or_else(|| anchored_at(day_out))
            .or_else(|| candidates.iter().min_by_key(|entry| entry.duration))
    }
}
