//! Provider configuration types
//!
//! One typed section per provider family. The `provider` field selects
//! the implementation by name; unknown names are rejected during wiring,
//! not here.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CANDIDATE_TIMEOUT_SECS;

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider name (`fastembed` or `null`)
    pub provider: String,

    /// Model name override (provider default when absent)
    pub model: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "fastembed".to_string(),
            model: None,
        }
    }
}

/// Vector search provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorSearchConfig {
    /// Provider name (`mongodb`, `in-memory`, or `null`)
    pub provider: String,

    /// Catalog database name
    pub database: String,

    /// Catalog collection name
    pub collection: String,

    /// Atlas search index name
    pub index_name: String,

    /// Catalog field holding the dense vector
    pub vector_field: String,
}

impl Default for VectorSearchConfig {
    fn default() -> Self {
        Self {
            provider: "mongodb".to_string(),
            database: "cartwise".to_string(),
            collection: "products".to_string(),
            index_name: "vector_index".to_string(),
            vector_field: "embedding".to_string(),
        }
    }
}

/// Candidate generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Provider name (`gemini` or `static`)
    pub provider: String,

    /// API key for the cloud generator
    pub api_key: Option<String>,

    /// Model name override (provider default when absent)
    pub model: Option<String>,

    /// Base URL override (provider default when absent)
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: None,
            model: None,
            base_url: None,
            timeout_secs: DEFAULT_CANDIDATE_TIMEOUT_SECS,
        }
    }
}
