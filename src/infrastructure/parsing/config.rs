//! Parsing configuration for size-information discovery
//!
//! Centralized configuration for CSS selectors, sizing phrases, measurement
//! keywords and the candidate ranking rules.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Lower-case phrases that mark an element as sizing-related
    pub size_phrases: Vec<String>,

    /// Selectors building the candidate pool, in pool order
    pub candidate_selectors: Vec<String>,

    /// Selectors for size-selection UI (dropdowns, swatches, buttons)
    pub option_selectors: Vec<String>,

    /// Keyword synonyms per measurement, in search priority
    pub measurement_keywords: MeasurementKeywords,

    /// Ancestor walk limits
    pub container: ContainerRules,

    /// Candidate ranking rules
    pub scoring: CandidateScoring,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            size_phrases: [
                "size chart",
                "size guide",
                "measurements",
                "dimensions",
                "fit guide",
                "sizing info",
                "size information",
            ]
            .map(String::from)
            .to_vec(),
            candidate_selectors: [
                "table",
                r#"[class*="size"]:not(select):not(option)"#,
                r#"[id*="size"]:not(select):not(option)"#,
                "button",
                "a",
                ".product-info",
                ".product-details",
                ".product-description",
            ]
            .map(String::from)
            .to_vec(),
            option_selectors: [
                r#"select[name*="size" i]"#,
                r#"[class*="size-select" i]"#,
                r#"[class*="size-option" i]"#,
                r#"[data-variant-type="size"]"#,
            ]
            .map(String::from)
            .to_vec(),
            measurement_keywords: MeasurementKeywords::default(),
            container: ContainerRules::default(),
            scoring: CandidateScoring::default(),
        }
    }
}

/// Keyword synonyms for each chart measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementKeywords {
    pub chest: Vec<String>,
    pub shoulders: Vec<String>,
    pub length: Vec<String>,
}

impl Default for MeasurementKeywords {
    fn default() -> Self {
        Self {
            chest: ["chest", "bust", "width"].map(String::from).to_vec(),
            shoulders: ["shoulder", "shoulders", "yoke"].map(String::from).to_vec(),
            length: ["length", "height"].map(String::from).to_vec(),
        }
    }
}

/// When the walk from a matched element towards the root stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRules {
    /// Maximum number of parent steps
    pub max_ancestor_steps: usize,

    /// A container with more characters than this holds enough content
    pub min_container_text_len: usize,
}

impl Default for ContainerRules {
    fn default() -> Self {
        Self {
            max_ancestor_steps: 3,
            min_container_text_len: 100,
        }
    }
}

/// Weights used to rank candidate regions. Higher scores are tried first;
/// equal scores keep candidate pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateScoring {
    /// Added once per distinct sizing phrase found in the element's text
    pub phrase_weight: u32,

    /// Added when the element is, or contains, a table
    pub table_weight: u32,

    /// Added when the element's class or id mentions "size"
    pub size_attribute_weight: u32,
}

impl CandidateScoring {
    /// All weights zero: candidates are tried strictly in pool order.
    pub const fn pool_order() -> Self {
        Self {
            phrase_weight: 0,
            table_weight: 0,
            size_attribute_weight: 0,
        }
    }
}

impl Default for CandidateScoring {
    fn default() -> Self {
        Self {
            phrase_weight: 1,
            table_weight: 3,
            size_attribute_weight: 2,
        }
    }
}
