//! Provider Constants
//!
//! Constants specific to provider implementations. Domain-level constants
//! (embedding dimension, candidate limits, pool sizing) live in
//! `cartwise-domain`.

use std::time::Duration;

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Model name reported by the null embedding provider
pub const EMBEDDING_MODEL_NULL: &str = "null-test";

// ============================================================================
// CANDIDATE GENERATOR CONSTANTS
// ============================================================================

/// Default Gemini generative model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Default Gemini API base URL
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Sampling temperature used for candidate generation
pub const GEMINI_TEMPERATURE: f64 = 0.2;

/// Default timeout for generative API requests
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// VECTOR SEARCH CONSTANTS
// ============================================================================

/// Default Atlas vector-search index name
pub const MONGODB_DEFAULT_INDEX_NAME: &str = "vector_index";

/// Default catalog field holding the dense vector
pub const MONGODB_DEFAULT_VECTOR_FIELD: &str = "embedding";

/// Content type header for JSON API requests
pub const CONTENT_TYPE_JSON: &str = "application/json";
