//! Generic chest-based size chart
//!
//! The fallback table mapping a chest measurement to a size label. A chart is
//! validated once on construction and never mutated afterwards; callers hand
//! it to the recommender explicitly.

use super::size_token::SizeToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Half-open interval `[min, max)` over the chest axis, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub size: SizeToken,
    #[serde(flatten)]
    pub range: SizeRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("size chart must contain at least one entry")]
    Empty,

    #[error("range for {size} is empty or inverted: [{min}, {max})")]
    InvalidRange { size: SizeToken, min: f64, max: f64 },

    #[error("ranges for {previous} and {next} are not contiguous")]
    NotContiguous { previous: SizeToken, next: SizeToken },

    #[error("{next} must come after {previous} in the chart")]
    OutOfOrder { previous: SizeToken, next: SizeToken },
}

/// Ordered, contiguous chest chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChartEntry>", into = "Vec<ChartEntry>")]
pub struct GenericSizeChart {
    entries: Vec<ChartEntry>,
}

impl GenericSizeChart {
    #[allow(clippy::float_cmp)]
    pub fn new(entries: Vec<ChartEntry>) -> Result<Self, ChartError> {
        let Some(first) = entries.first() else {
            return Err(ChartError::Empty);
        };
        if !first.range.min.is_finite() {
            return Err(ChartError::InvalidRange {
                size: first.size,
                min: first.range.min,
                max: first.range.max,
            });
        }

        for entry in &entries {
            if !(entry.range.min < entry.range.max) || !entry.range.max.is_finite() {
                return Err(ChartError::InvalidRange {
                    size: entry.size,
                    min: entry.range.min,
                    max: entry.range.max,
                });
            }
        }

        for pair in entries.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if previous.size >= next.size {
                return Err(ChartError::OutOfOrder {
                    previous: previous.size,
                    next: next.size,
                });
            }
            if previous.range.max != next.range.min {
                return Err(ChartError::NotContiguous {
                    previous: previous.size,
                    next: next.size,
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Label whose interval contains `chest`.
    pub fn lookup(&self, chest: f64) -> Option<SizeToken> {
        self.entries
            .iter()
            .find(|entry| entry.range.contains(chest))
            .map(|entry| entry.size)
    }

    /// Clamp a value outside every interval to the nearest end of the chart.
    pub fn clamp(&self, chest: f64) -> SizeToken {
        let first = self.smallest();
        if chest <= first.range.min {
            first.size
        } else {
            self.largest().size
        }
    }

    /// Label whose midpoint is nearest to `chest`. Ties go to the smaller size.
    pub fn nearest_by_midpoint(&self, chest: f64) -> SizeToken {
        let mut best = self.smallest().size;
        let mut smallest_diff = f64::INFINITY;

        for entry in &self.entries {
            let diff = (chest - entry.range.midpoint()).abs();
            if diff < smallest_diff {
                smallest_diff = diff;
                best = entry.size;
            }
        }

        best
    }

    fn smallest(&self) -> &ChartEntry {
        &self.entries[0]
    }

    fn largest(&self) -> &ChartEntry {
        &self.entries[self.entries.len() - 1]
    }
}

impl Default for GenericSizeChart {
    fn default() -> Self {
        let entries = [
            (SizeToken::XS, 30.0, 34.0),
            (SizeToken::S, 34.0, 37.0),
            (SizeToken::M, 37.0, 40.0),
            (SizeToken::L, 40.0, 43.0),
            (SizeToken::XL, 43.0, 46.0),
            (SizeToken::XXL, 46.0, 49.0),
        ]
        .into_iter()
        .map(|(size, min, max)| ChartEntry {
            size,
            range: SizeRange::new(min, max),
        })
        .collect();

        Self { entries }
    }
}

impl TryFrom<Vec<ChartEntry>> for GenericSizeChart {
    type Error = ChartError;

    fn try_from(entries: Vec<ChartEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<GenericSizeChart> for Vec<ChartEntry> {
    fn from(chart: GenericSizeChart) -> Self {
        chart.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn entry(size: SizeToken, min: f64, max: f64) -> ChartEntry {
        ChartEntry {
            size,
            range: SizeRange::new(min, max),
        }
    }

    #[test]
    fn default_chart_passes_validation() {
        let chart = GenericSizeChart::default();
        assert_eq!(GenericSizeChart::new(chart.entries().to_vec()), Ok(chart));
    }

    #[rstest]
    #[case(30.0, Some(SizeToken::XS))]
    #[case(33.9, Some(SizeToken::XS))]
    #[case(34.0, Some(SizeToken::S))]
    #[case(39.5, Some(SizeToken::M))]
    #[case(48.99, Some(SizeToken::XXL))]
    #[case(49.0, None)]
    #[case(29.0, None)]
    fn lookup_uses_half_open_ranges(#[case] chest: f64, #[case] expected: Option<SizeToken>) {
        assert_eq!(GenericSizeChart::default().lookup(chest), expected);
    }

    #[test]
    fn midpoint_tie_goes_to_first_entry() {
        // M midpoint 38.5 and L midpoint 41.5 are both 1.5 away from 40.
        assert_eq!(GenericSizeChart::default().nearest_by_midpoint(40.0), SizeToken::M);
        assert_eq!(GenericSizeChart::default().nearest_by_midpoint(41.0), SizeToken::L);
    }

    #[test]
    fn rejects_gaps_and_disorder() {
        let gap = vec![entry(SizeToken::S, 34.0, 37.0), entry(SizeToken::M, 38.0, 40.0)];
        assert_eq!(
            GenericSizeChart::new(gap),
            Err(ChartError::NotContiguous {
                previous: SizeToken::S,
                next: SizeToken::M
            })
        );

        let disorder = vec![entry(SizeToken::M, 34.0, 37.0), entry(SizeToken::S, 37.0, 40.0)];
        assert!(matches!(
            GenericSizeChart::new(disorder),
            Err(ChartError::OutOfOrder { .. })
        ));

        assert_eq!(GenericSizeChart::new(Vec::new()), Err(ChartError::Empty));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"[{"size":"S","min":34.0,"max":37.0},{"size":"M","min":36.0,"max":40.0}]"#;
        assert!(serde_json::from_str::<GenericSizeChart>(json).is_err());

        let json = r#"[{"size":"S","min":34.0,"max":37.0},{"size":"M","min":37.0,"max":40.0}]"#;
        let chart: GenericSizeChart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.lookup(38.0), Some(SizeToken::M));
    }

    proptest! {
        #[test]
        fn every_value_inside_a_range_maps_to_its_label(idx in 0usize..6, frac in 0.0f64..1.0) {
            let chart = GenericSizeChart::default();
            let entry = chart.entries()[idx];
            let chest = entry.range.min + (entry.range.max - entry.range.min) * frac;
            prop_assume!(chest < entry.range.max);
            prop_assert_eq!(chart.lookup(chest), Some(entry.size));
        }

        #[test]
        fn values_outside_the_chart_clamp_to_the_ends(below in 0.0f64..30.0, above in 49.0f64..500.0) {
            let chart = GenericSizeChart::default();
            prop_assert_eq!(chart.clamp(below), SizeToken::XS);
            prop_assert_eq!(chart.clamp(above), SizeToken::XXL);
        }
    }
}
