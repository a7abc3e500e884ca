use serde::{Deserialize, Deserializer, Serializer};

/// Round to cents. Only applied when a value leaves the engine.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_currency(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn serialize_currency<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_currency(*value))
}

/// Interpret a loosely typed JSON value as a price.
///
/// Numbers and numeric strings are accepted; anything else (including
/// negative or non-finite values) counts as no price at all.
pub fn parse_price(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite() && *p >= 0.0)
}

// Dirty price fields from the UI deserialize to None instead of failing the
// whole plan.
pub fn deserialize_lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_price))
}

// Free-text fields that the UI sometimes sends as numbers (e.g. duration: 2).
pub fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Render a duration in minutes the way the itinerary UI displays it.
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {:02}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prices_parse_leniently() {
        assert_eq!(parse_price(&json!(12.5)), Some(12.5));
        assert_eq!(parse_price(&json!(" 30 ")), Some(30.0));
        assert_eq!(parse_price(&json!("free")), None);
        assert_eq!(parse_price(&json!(-4)), None);
        assert_eq!(parse_price(&json!(null)), None);
        assert_eq!(parse_price(&json!(true)), None);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.1 + 0.2), "0.30");
        assert_eq!(format_currency(52.0), "52.00");
        assert_eq!(round_currency(10.005_000_1), 10.01);
    }

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(65), "1h 05m");
    }
}
