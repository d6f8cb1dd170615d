//! Request/response messages exchanged between the shopper-facing side and
//! the page-inspecting side.

use crate::domain::{Recommendation, UserMeasurements};
use serde::{Deserialize, Serialize};

/// Inbound request. JSON: `{"kind":"FIND_SIZE","measurements":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SizeMessage {
    #[serde(rename = "FIND_SIZE")]
    FindSize { measurements: UserMeasurements },
}

/// Outbound response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeResponse {
    pub size: String,
    pub explanation: String,
}

impl From<Recommendation> for SizeResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            size: recommendation.size.to_string(),
            explanation: recommendation.explanation,
        }
    }
}

impl SizeResponse {
    /// Text shown to the shopper.
    pub fn display_text(&self) -> String {
        format!("Recommended size: {}\n{}", self.size, self.explanation)
    }
}
