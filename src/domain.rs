//! Domain module - sizing vocabulary, measurements and results
//!
//! Plain data types shared by the page parsers and the recommender.
//! Nothing here touches the document or the filesystem.

pub mod measurements;
pub mod recommendation;
pub mod size_chart;
pub mod size_info;
pub mod size_token;

pub use measurements::{ChartMeasurements, UserMeasurements};
pub use recommendation::{Recommendation, RecommendationBasis};
pub use size_chart::{ChartEntry, ChartError, GenericSizeChart, SizeRange};
pub use size_info::SizeInfo;
pub use size_token::{normalize_size_option, scan_size_tokens, SizeToken, UnknownSizeToken};
