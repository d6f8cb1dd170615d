//! Keyword-driven measurement extraction from chart text
//!
//! A measurement is the first decimal number following one of its keyword
//! synonyms. Keywords are tried in priority order and the first keyword that
//! matches anywhere in the text wins, even if a later keyword appears earlier
//! in the text. Values are not range-checked.

use super::config::MeasurementKeywords;
use super::{ParsingError, ParsingResult};
use crate::domain::ChartMeasurements;
use regex::Regex;
use tracing::debug;

/// Find the value for the first keyword in `keywords` that matches `text`.
pub fn find_measurement<S: AsRef<str>>(text: &str, keywords: &[S]) -> Option<f64> {
    keywords.iter().find_map(|keyword| {
        let pattern = keyword_pattern(keyword.as_ref()).ok()?;
        capture_number(&pattern, text)
    })
}

fn keyword_pattern(keyword: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?i){}[^\d]*(\d+(?:\.\d+)?)[^\d]*(?:inches|"|in)?"#,
        regex::escape(keyword)
    ))
}

fn capture_number(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// One measurement's keywords, compiled in priority order.
#[derive(Debug, Clone)]
struct KeywordGroup {
    name: &'static str,
    patterns: Vec<(String, Regex)>,
}

impl KeywordGroup {
    fn compile(name: &'static str, keywords: &[String]) -> ParsingResult<Self> {
        let patterns = keywords
            .iter()
            .map(|keyword| {
                keyword_pattern(keyword)
                    .map(|regex| (keyword.clone(), regex))
                    .map_err(|e| ParsingError::invalid_pattern(keyword, &e.to_string()))
            })
            .collect::<ParsingResult<Vec<_>>>()?;

        Ok(Self { name, patterns })
    }

    fn find(&self, text: &str) -> Option<f64> {
        for (keyword, pattern) in &self.patterns {
            if let Some(value) = capture_number(pattern, text) {
                debug!("Matched {} via keyword '{}': {}", self.name, keyword, value);
                return Some(value);
            }
        }
        None
    }
}

/// Extracts chest, shoulder and length values from chart text.
#[derive(Debug, Clone)]
pub struct MeasurementExtractor {
    chest: KeywordGroup,
    shoulders: KeywordGroup,
    length: KeywordGroup,
}

impl MeasurementExtractor {
    pub fn new() -> ParsingResult<Self> {
        Self::with_keywords(&MeasurementKeywords::default())
    }

    pub fn with_keywords(keywords: &MeasurementKeywords) -> ParsingResult<Self> {
        Ok(Self {
            chest: KeywordGroup::compile("chest", &keywords.chest)?,
            shoulders: KeywordGroup::compile("shoulders", &keywords.shoulders)?,
            length: KeywordGroup::compile("length", &keywords.length)?,
        })
    }

    pub fn extract(&self, text: &str) -> ChartMeasurements {
        ChartMeasurements {
            chest: self.chest.find(text),
            shoulders: self.shoulders.find(text),
            length: self.length.find(text),
        }
    }
}
