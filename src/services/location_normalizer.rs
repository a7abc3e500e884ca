use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

// Place names as travellers type them, mapped to fare-table stations.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Zurich", "Zürich HB"),
    ("Zürich", "Zürich HB"),
    ("Zurich HB", "Zürich HB"),
    ("Zurich Main Station", "Zürich HB"),
    ("Zurich Airport", "Zürich Flughafen"),
    ("Zürich Airport", "Zürich Flughafen"),
    ("ZRH", "Zürich Flughafen"),
    ("Geneva", "Genève"),
    ("Geneve", "Genève"),
    ("Geneva Airport", "Genève-Aéroport"),
    ("GVA", "Genève-Aéroport"),
    ("Lucerne", "Luzern"),
    ("Interlaken", "Interlaken Ost"),
    ("Berne", "Bern"),
    ("Basel", "Basel SBB"),
    ("Basle", "Basel SBB"),
    ("Saint Moritz", "St. Moritz"),
    ("St Moritz", "St. Moritz"),
];

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn alias_key(name: &str) -> String {
    whitespace()
        .replace_all(name.trim(), " ")
        .to_lowercase()
}

/// Maps free-text place names onto canonical fare-table stations.
#[derive(Debug, Clone)]
pub struct LocationNormalizer {
    aliases: HashMap<String, String>,
}

impl Default for LocationNormalizer {
    fn default() -> Self {
        Self::with_aliases(std::iter::empty::<(String, String)>())
    }
}

impl LocationNormalizer {
    /// Built-in aliases, overridden by `extra` where both define a name.
    pub fn with_aliases<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut aliases: HashMap<String, String> = DEFAULT_ALIASES
            .iter()
            .map(|(alias, station)| (alias_key(alias), station.to_string()))
            .collect();
        for (alias, station) in extra {
            aliases.insert(alias_key(alias.as_ref()), station.into());
        }
        Self { aliases }
    }

    /// Canonical station for `name`. Unknown names come back trimmed but
    /// otherwise unchanged.
    pub fn normalize(&self, name: &str) -> String {
        match self.aliases.get(&alias_key(name)) {
            Some(station) => station.clone(),
            None => name.trim().to_string(),
        }
    }

    pub fn same_station(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
