//! Sizing information discovered on a product page

use super::measurements::ChartMeasurements;
use super::size_token::SizeToken;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The representation a page's sizing content was found in.
///
/// Token sets iterate from smallest to largest size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SizeInfo {
    /// Numeric values read from a measurement chart.
    Measurements { data: ChartMeasurements },
    /// Size labels mentioned in chart prose.
    Sizes { sizes: BTreeSet<SizeToken> },
    /// Size labels offered by selectable UI (dropdowns, buttons).
    Options { sizes: BTreeSet<SizeToken> },
    /// Nothing sizing-related on the page.
    #[default]
    None,
}

impl SizeInfo {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Measurements { .. } => "measurements",
            Self::Sizes { .. } => "sizes",
            Self::Options { .. } => "options",
            Self::None => "none",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let info = SizeInfo::Options {
            sizes: [SizeToken::L, SizeToken::S].into_iter().collect(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({"type": "options", "sizes": ["S", "L"]}));

        let none = serde_json::to_value(SizeInfo::None).unwrap();
        assert_eq!(none, serde_json::json!({"type": "none"}));
    }

    #[test]
    fn measurements_round_trip_through_json() {
        let json = r#"{"type":"measurements","data":{"chest":40.0,"shoulders":null,"length":28.5}}"#;
        let info: SizeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.kind(), "measurements");
        match info {
            SizeInfo::Measurements { data } => {
                assert_eq!(data.chest, Some(40.0));
                assert_eq!(data.length, Some(28.5));
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }
}
