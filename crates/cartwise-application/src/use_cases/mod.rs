//! Application use cases

/// Hybrid recommendation orchestration
pub mod recommendation;

pub use recommendation::RecommendationService;
