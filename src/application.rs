//! Application layer: size recommendation and the request/response adapter

pub mod dto;
pub mod error;
pub mod size_recommender;
pub mod size_service;

pub use dto::{SizeMessage, SizeResponse};
pub use error::{FindSizeError, RecommendationError};
pub use size_recommender::SizeRecommender;
pub use size_service::{spawn_page_agent, SizeAdvisor, SizeClient};
