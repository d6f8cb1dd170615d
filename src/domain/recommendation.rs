//! Recommendation result

use super::size_token::SizeToken;
use serde::{Deserialize, Serialize};

/// Which path produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBasis {
    /// Nearest midpoint against a chest value read from the page chart.
    SizeChart,
    /// Chest falls inside a generic chart interval.
    GenericChart,
    /// Chest is outside the generic chart and was clamped.
    GenericChartApproximate,
    /// Generic recommendation is offered by the page.
    Available,
    /// Generic recommendation is not offered; nearest offered size instead.
    ClosestAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub size: SizeToken,
    pub explanation: String,
    pub basis: RecommendationBasis,
}

impl Recommendation {
    pub fn new(size: SizeToken, explanation: impl Into<String>, basis: RecommendationBasis) -> Self {
        Self {
            size,
            explanation: explanation.into(),
            basis,
        }
    }

    pub const fn is_approximate(&self) -> bool {
        matches!(
            self.basis,
            RecommendationBasis::GenericChartApproximate | RecommendationBasis::ClosestAvailable
        )
    }
}
