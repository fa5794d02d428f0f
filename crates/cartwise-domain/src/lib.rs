//! Domain Layer - Cartwise
//!
//! Core business types for complementary-product recommendation:
//! value objects, the failure taxonomy, and the ports (traits) that
//! provider implementations plug into.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines value objects (`Embedding`, `CandidateSuggestion`, ...)
//! - Defines the error taxonomy shared by all layers
//! - Defines provider ports (`EmbeddingProvider`, `VectorSearchProvider`,
//!   `CandidateGenerator`)
//! - Has no dependency on infrastructure or concrete providers

/// Domain-level constants
pub mod constants;
/// Error handling types
pub mod error;
/// Provider port definitions
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    CandidateSuggestion, CatalogItem, CategoryTaxonomy, Embedding, RecommendationResult,
};
