//! # Cartwise - Provider Implementations
//!
//! This crate contains the provider implementations behind the ports
//! defined in `cartwise-domain`. Each provider family covers one external
//! concern of the hybrid recommendation pipeline.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | FastEmbed, Null |
//! | Vector Search | `VectorSearchProvider` | MongoDB Atlas, InMemory, Null |
//! | Candidates | `CandidateGenerator` | Gemini, Static |
//!
//! ## Feature Flags
//!
//! Heavy external dependencies are gated for minimal builds:
//!
//! ```toml
//! [dependencies]
//! cartwise-providers = { version = "0.1", features = ["embedding-fastembed", "vectorstore-mongodb"] }
//! ```

// Re-export cartwise-domain types commonly used with providers
pub use cartwise_domain::error::{Error, Result};
pub use cartwise_domain::ports::{CandidateGenerator, EmbeddingProvider, VectorSearchProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements the `EmbeddingProvider` trait for local embedding models.
pub mod embedding;

/// Vector search provider implementations
///
/// Implements the `VectorSearchProvider` trait for catalog stores.
pub mod vector_search;

/// Candidate generation provider implementations
///
/// Implements the `CandidateGenerator` trait for generative models.
pub mod candidates;
