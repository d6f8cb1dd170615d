//! Body and chart measurement records

use serde::{Deserialize, Serialize};

/// Shopper's body measurements, in inches.
///
/// Only `chest` drives the recommendation today. `shoulders` and `length`
/// are captured and persisted so later scoring can use them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMeasurements {
    pub chest: Option<f64>,
    pub shoulders: Option<f64>,
    pub length: Option<f64>,
}

impl UserMeasurements {
    pub const fn with_chest(chest: f64) -> Self {
        Self {
            chest: Some(chest),
            shoulders: None,
            length: None,
        }
    }

    /// Overlay the values present in `newer` on top of `self`.
    pub fn merged_with(self, newer: Self) -> Self {
        Self {
            chest: newer.chest.or(self.chest),
            shoulders: newer.shoulders.or(self.shoulders),
            length: newer.length.or(self.length),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.chest.is_none() && self.shoulders.is_none() && self.length.is_none()
    }
}

/// Measurements read from a page's size chart text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMeasurements {
    pub chest: Option<f64>,
    pub shoulders: Option<f64>,
    pub length: Option<f64>,
}

impl ChartMeasurements {
    /// True when at least one measurement was found.
    pub const fn has_any(&self) -> bool {
        self.chest.is_some() || self.shoulders.is_some() || self.length.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_newer_values() {
        let stored = UserMeasurements {
            chest: Some(38.0),
            shoulders: Some(17.0),
            length: None,
        };
        let typed = UserMeasurements {
            chest: Some(40.0),
            shoulders: None,
            length: Some(28.0),
        };

        let merged = stored.merged_with(typed);
        assert_eq!(merged.chest, Some(40.0));
        assert_eq!(merged.shoulders, Some(17.0));
        assert_eq!(merged.length, Some(28.0));
    }

    #[test]
    fn partial_chart_counts_as_found() {
        let chart = ChartMeasurements {
            length: Some(29.5),
            ..ChartMeasurements::default()
        };
        assert!(chart.has_any());
        assert!(!ChartMeasurements::default().has_any());
    }
}
