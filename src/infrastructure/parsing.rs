//! HTML parsing infrastructure for size-information discovery
//!
//! The page document is a `scraper::Html` snapshot. Parsers are built once
//! from a [`ParsingConfig`] (selectors and patterns are compiled up front)
//! and are then queried per document without further failure modes.

pub mod config;
pub mod measurement_extractor;
pub mod option_scanner;
pub mod size_info_extractor;
pub mod size_info_locator;

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
pub use config::{CandidateScoring, ContainerRules, MeasurementKeywords, ParsingConfig};
pub use measurement_extractor::{find_measurement, MeasurementExtractor};
pub use option_scanner::OptionScanner;
pub use size_info_extractor::SizeInfoExtractor;
pub use size_info_locator::{ScoredCandidate, SizeInfoLocator};

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Document-level entry point for sizing discovery
pub trait SizeInfoSource {
    fn find_size_information(&self, html: &Html) -> crate::domain::SizeInfo;
}

impl SizeInfoSource for SizeInfoLocator {
    fn find_size_information(&self, html: &Html) -> crate::domain::SizeInfo {
        Self::find_size_information(self, html)
    }
}

/// Compile selector strings, skipping invalid ones. Fails only when none compile.
pub(crate) fn compile_selectors(purpose: &str, selector_strings: &[String]) -> ParsingResult<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("Failed to compile {} selector '{}': {}", purpose, selector_str, e);
                errors.push(format!("'{selector_str}': {e}"));
            }
        }
    }

    if selectors.is_empty() && !selector_strings.is_empty() {
        return Err(ParsingError::no_valid_selectors(
            purpose,
            selector_strings.len(),
            &errors,
        ));
    }

    Ok(selectors)
}

/// Concatenated text of every text node below `element`.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
