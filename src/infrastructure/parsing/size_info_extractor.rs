//! Classifies a candidate region as a measurement chart or a size list
//!
//! Measurement data is tried first because it allows a finer recommendation
//! than coarse size labels.

use super::config::ParsingConfig;
use super::measurement_extractor::MeasurementExtractor;
use super::{element_text, ParsingResult};
use crate::domain::{scan_size_tokens, SizeInfo, SizeToken};
use scraper::ElementRef;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SizeInfoExtractor {
    measurements: MeasurementExtractor,
}

impl SizeInfoExtractor {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    pub fn with_config(config: &ParsingConfig) -> ParsingResult<Self> {
        Ok(Self {
            measurements: MeasurementExtractor::with_keywords(&config.measurement_keywords)?,
        })
    }

    /// Structured size information found in `element`'s full text, if any.
    pub fn extract(&self, element: ElementRef<'_>) -> Option<SizeInfo> {
        self.extract_from_text(&element_text(element))
    }

    pub fn extract_from_text(&self, text: &str) -> Option<SizeInfo> {
        let data = self.measurements.extract(text);
        if data.has_any() {
            debug!("Classified region as measurement chart: {:?}", data);
            return Some(SizeInfo::Measurements { data });
        }

        let sizes: BTreeSet<SizeToken> = scan_size_tokens(text).collect();
        if sizes.is_empty() {
            return None;
        }

        debug!("Classified region as size list: {:?}", sizes);
        Some(SizeInfo::Sizes { sizes })
    }
}
