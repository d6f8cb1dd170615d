//! Size Advisor - product page size discovery and best-fit size recommendation
//!
//! Scans a product page for sizing content (a measurement chart, a list of
//! sizes, or a size selector) and recommends a size for the shopper's
//! measurements, falling back to a generic chest chart.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{SizeAdvisor, SizeRecommender};
pub use domain::{Recommendation, SizeInfo, SizeToken, UserMeasurements};
