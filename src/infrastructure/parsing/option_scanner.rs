//! Size-selection UI scanner
//!
//! Collects the discrete sizes a page lets the shopper pick: `<select>`
//! dropdowns named after size, size swatches and buttons, and variant
//! elements tagged with a size data attribute.

use super::config::ParsingConfig;
use super::{compile_selectors, element_text, ParsingError, ParsingResult};
use crate::domain::{normalize_size_option, SizeToken};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;
use tracing::debug;

pub struct OptionScanner {
    option_selectors: Vec<Selector>,
    option_item: Selector,
}

impl OptionScanner {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    pub fn with_config(config: &ParsingConfig) -> ParsingResult<Self> {
        Ok(Self {
            option_selectors: compile_selectors("size options", &config.option_selectors)?,
            option_item: Selector::parse("option")
                .map_err(|e| ParsingError::invalid_selector("option", &e.to_string()))?,
        })
    }

    /// Every canonical size offered by the page's size-selection UI.
    pub fn find_size_options(&self, html: &Html) -> BTreeSet<SizeToken> {
        let mut sizes = BTreeSet::new();

        for selector in &self.option_selectors {
            for element in html.select(selector) {
                self.collect_from_element(element, &mut sizes);
            }
        }

        debug!("Found {} size options", sizes.len());
        sizes
    }

    fn collect_from_element(&self, element: ElementRef<'_>, sizes: &mut BTreeSet<SizeToken>) {
        if element.value().name().eq_ignore_ascii_case("select") {
            for option in element.select(&self.option_item) {
                if let Some(size) = normalize_size_option(&element_text(option)) {
                    sizes.insert(size);
                }
            }
        } else if let Some(size) = normalize_size_option(&element_text(element)) {
            sizes.insert(size);
        }
    }
}
