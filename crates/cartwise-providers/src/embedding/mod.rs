//! Embedding Provider Implementations
//!
//! Converts product text into dense vector embeddings. The catalog is
//! embedded with the same model at ingestion time, so query and corpus
//! vectors live in one space.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | FastEmbedProvider | Local ML | Complete (optional) |
//!
//! ## Provider Selection Guide
//!
//! - **Tests/development**: `NullEmbeddingProvider`, deterministic and
//!   offline.
//! - **Production**: `FastEmbedProvider` (requires the
//!   `embedding-fastembed` feature), local ONNX inference with the
//!   all-MiniLM-L6-v2 family at 384 dimensions.

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;

#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use null::NullEmbeddingProvider;
