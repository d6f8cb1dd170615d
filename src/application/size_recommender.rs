//! Size recommender
//!
//! Maps a shopper's chest measurement to a size, using whatever sizing
//! information the page offered:
//!
//! - a measurement chart with a chest value: nearest chart midpoint
//! - a list of sizes or selectable options: the generic recommendation if it
//!   is offered, otherwise the offered size closest to it
//! - nothing usable: the generic chart alone
//!
//! Shoulder and length values are accepted but do not influence the result.

use super::error::RecommendationError;
use crate::domain::{
    GenericSizeChart, Recommendation, RecommendationBasis, SizeInfo, SizeToken, UserMeasurements,
};
use std::collections::BTreeSet;
use tracing::debug;

const SIZE_CHART_EXPLANATION: &str = "Based on chest measurements from the size chart.";
const GENERIC_EXPLANATION: &str = "Based on generic size chart (chest measurement).";
const APPROXIMATE_EXPLANATION: &str =
    "Based on generic size chart. This is an approximate recommendation.";

#[derive(Debug, Clone, Default)]
pub struct SizeRecommender {
    chart: GenericSizeChart,
}

impl SizeRecommender {
    pub const fn new(chart: GenericSizeChart) -> Self {
        Self { chart }
    }

    pub const fn chart(&self) -> &GenericSizeChart {
        &self.chart
    }

    pub fn recommend(
        &self,
        measurements: &UserMeasurements,
        size_info: &SizeInfo,
    ) -> Result<Recommendation, RecommendationError> {
        let chest = validated_chest(measurements)?;

        let recommendation = match size_info {
            SizeInfo::None => self.recommend_generic(chest),
            SizeInfo::Measurements { data } => match data.chest {
                Some(chart_chest) if chart_chest > 0.0 => self.recommend_from_measurements(chest),
                _ => self.recommend_generic(chest),
            },
            SizeInfo::Sizes { sizes } | SizeInfo::Options { sizes } => {
                self.recommend_from_size_list(chest, sizes)
            }
        };

        debug!(
            "Recommended {} from {} size info ({:?})",
            recommendation.size,
            size_info.kind(),
            recommendation.basis
        );
        Ok(recommendation)
    }

    /// Generic chart lookup, clamping values outside the chart.
    pub fn recommend_generic(&self, chest: f64) -> Recommendation {
        match self.chart.lookup(chest) {
            Some(size) => Recommendation::new(size, GENERIC_EXPLANATION, RecommendationBasis::GenericChart),
            None => Recommendation::new(
                self.chart.clamp(chest),
                APPROXIMATE_EXPLANATION,
                RecommendationBasis::GenericChartApproximate,
            ),
        }
    }

    fn recommend_from_measurements(&self, chest: f64) -> Recommendation {
        Recommendation::new(
            self.chart.nearest_by_midpoint(chest),
            SIZE_CHART_EXPLANATION,
            RecommendationBasis::SizeChart,
        )
    }

    fn recommend_from_size_list(&self, chest: f64, available: &BTreeSet<SizeToken>) -> Recommendation {
        let generic = self.recommend_generic(chest);

        if available.contains(&generic.size) {
            return Recommendation::new(
                generic.size,
                format!("{} This size is available.", generic.explanation),
                RecommendationBasis::Available,
            );
        }

        let Some(closest) = closest_available(generic.size, available) else {
            return generic;
        };

        Recommendation::new(
            closest,
            format!(
                "Based on your measurements, we recommend {}, but it's not available. {} is the closest available size.",
                generic.size, closest
            ),
            RecommendationBasis::ClosestAvailable,
        )
    }
}

/// Offered size nearest to `ideal` by position in the substitution order.
/// The first minimal candidate wins; tokens outside the order never win
/// unless nothing else is offered.
fn closest_available(ideal: SizeToken, available: &BTreeSet<SizeToken>) -> Option<SizeToken> {
    let Some(ideal_index) = ideal.substitution_index() else {
        return available.iter().next().copied();
    };

    let mut closest = None;
    let mut smallest_diff = usize::MAX;

    for &size in available {
        if let Some(index) = size.substitution_index() {
            let diff = index.abs_diff(ideal_index);
            if diff < smallest_diff {
                smallest_diff = diff;
                closest = Some(size);
            }
        }
    }

    closest.or_else(|| available.iter().next().copied())
}

fn validated_chest(measurements: &UserMeasurements) -> Result<f64, RecommendationError> {
    match measurements.chest {
        Some(chest) if chest.is_finite() && chest > 0.0 => Ok(chest),
        other => Err(RecommendationError::invalid_measurement("chest", other)),
    }
}
