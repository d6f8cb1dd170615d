//! Canonical size vocabulary
//!
//! The fixed English size labels recognised on product pages, plus the
//! whole-word normalizer used for dropdown options and chart prose.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whole-word size token, case-insensitive. `XS` precedes `S` so the
/// alternation never stops at a shorter label inside a longer one.
static SIZE_TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(XS|S|M|L|XL|XXL|XXXL)\b").expect("size token pattern is a valid literal")
});

/// Canonical size token, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeToken {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
    XXXL,
}

impl SizeToken {
    /// Every token in ascending order.
    pub const ALL: [Self; 7] = [
        Self::XS,
        Self::S,
        Self::M,
        Self::L,
        Self::XL,
        Self::XXL,
        Self::XXXL,
    ];

    /// Order used for closest-size substitution. `XXXL` takes no part in it.
    pub const SUBSTITUTION_ORDER: [Self; 6] =
        [Self::XS, Self::S, Self::M, Self::L, Self::XL, Self::XXL];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XS => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
            Self::XXXL => "XXXL",
        }
    }

    /// Position in [`Self::SUBSTITUTION_ORDER`], if the token takes part in it.
    pub fn substitution_index(self) -> Option<usize> {
        Self::SUBSTITUTION_ORDER.iter().position(|t| *t == self)
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a label outside the canonical vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a canonical size token")]
pub struct UnknownSizeToken(pub String);

impl FromStr for SizeToken {
    type Err = UnknownSizeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| UnknownSizeToken(s.to_string()))
    }
}

/// Extract the first whole-word size token from free text.
pub fn normalize_size_option(text: &str) -> Option<SizeToken> {
    SIZE_TOKEN_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Every whole-word size token occurring in `text`, in order of appearance.
pub fn scan_size_tokens(text: &str) -> impl Iterator<Item = SizeToken> + '_ {
    SIZE_TOKEN_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
}
