use std::collections::HashMap;

use log::warn;

use crate::models::reference::FareEntry;

/// Directed station-to-station fare table.
///
/// Lookups are exact: (A, B) and (B, A) are independent entries and a
/// missing direction is never inferred from the other one.
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    routes: HashMap<(String, String), FareEntry>,
}

impl FareTable {
    pub fn from_entries(entries: Vec<FareEntry>) -> Self {
        let mut routes = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.from.clone(), entry.to.clone());
            if routes.contains_key(&key) {
                warn!(
                    "Duplicate fare for {} -> {}, keeping the first entry",
                    entry.from, entry.to
                );
                continue;
            }
            routes.insert(key, entry);
        }
        Self { routes }
    }

    pub fn lookup(&self, from: &str, to: &str) -> Option<&FareEntry> {
        self.routes.get(&(from.to_string(), to.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
