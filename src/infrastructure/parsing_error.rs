//! Parsing error types for size-information discovery
//!
//! Lookups themselves never fail: a page without sizing content is an
//! ordinary `None`. These errors only surface while building parsers from
//! configuration (selectors and keyword patterns).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No valid selectors compiled for {purpose} from {attempted} attempts: {errors}")]
    NoValidSelectors {
        purpose: String,
        attempted: usize,
        errors: String,
    },

    #[error("Invalid measurement pattern for keyword '{keyword}': {reason}")]
    InvalidPattern { keyword: String, reason: String },
}

impl ParsingError {
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn no_valid_selectors(purpose: &str, attempted: usize, errors: &[String]) -> Self {
        Self::NoValidSelectors {
            purpose: purpose.to_string(),
            attempted,
            errors: errors.join(", "),
        }
    }

    pub fn invalid_pattern(keyword: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            keyword: keyword.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
