use thiserror::Error;

/// Errors that abort a pricing run or reference-data load.
///
/// Missing fare routes and unmatched attractions are not errors; they are
/// reported in the plan's transportation details instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No pass price configured for a {days}-day pass ({class})")]
    MissingPassPrice { days: u32, class: String },
    #[error("Reference data error in {file}: {message}")]
    ReferenceData { file: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Configuration-class errors mean the reference tables are broken, not
    /// that the itinerary is incomplete.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EngineError::MissingPassPrice { .. } | EngineError::ReferenceData { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PlanEditError {
    #[error("Day {0} not found in plan")]
    DayNotFound(u32),
    #[error("Activity {index} not found on day {day}")]
    ActivityNotFound { day: u32, index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
    #[error("Missing required setting: {0}")]
    Missing(String),
}
