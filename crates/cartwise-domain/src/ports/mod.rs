//! Provider Ports
//!
//! Async trait contracts implemented by the concrete providers in
//! `cartwise-providers` and consumed by the application layer. Each port
//! follows the same conventions: constructor-injected implementations,
//! `provider_name()` for diagnostics, and a default `health_check` where
//! a cheap probe exists.

/// Candidate generation port
pub mod candidates;
/// Text embedding port
pub mod embedding;
/// Vector similarity search port
pub mod vector_search;

pub use candidates::CandidateGenerator;
pub use embedding::EmbeddingProvider;
pub use vector_search::VectorSearchProvider;
