//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the recommendation
//! domain without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Fixed-dimension vector representation of text |
//! | [`CatalogItem`] | Read-only pre-embedded catalog record |
//! | [`CandidateSuggestion`] | Transient LLM-proposed complementary item |
//! | [`RecommendationResult`] | Grounded catalog match for one candidate |
//! | [`CategoryTaxonomy`] | Caller-supplied category constraint map |

/// Candidate-generation value objects
pub mod candidates;
/// Catalog and recommendation value objects
pub mod catalog;
/// Semantic embedding value objects
pub mod embedding;

pub use candidates::{CandidateSuggestion, CategoryTaxonomy, sort_candidates};
pub use catalog::{CatalogItem, RecommendationResult};
pub use embedding::Embedding;
