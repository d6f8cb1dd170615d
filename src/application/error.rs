//! Application-level error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendationError {
    /// Measurement missing, not a number, or not positive.
    #[error("Invalid {field} measurement: {value}")]
    InvalidMeasurement { field: &'static str, value: String },
}

impl RecommendationError {
    pub fn invalid_measurement(field: &'static str, value: Option<f64>) -> Self {
        Self::InvalidMeasurement {
            field,
            value: value.map_or_else(|| "missing".to_string(), |v| v.to_string()),
        }
    }
}

/// Errors seen by the requesting side of a size lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FindSizeError {
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    /// The page side never answered (closed, dropped or timed out).
    #[error("Could not find size information on this page.")]
    NoResponse,

    #[error("Page agent is not running")]
    AgentUnavailable,
}
