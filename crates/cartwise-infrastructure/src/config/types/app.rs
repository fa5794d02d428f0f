//! Main application configuration

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::providers::{CandidateConfig, EmbeddingConfig, VectorSearchConfig};

/// Provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Vector search provider configuration
    #[serde(default)]
    pub vector_search: VectorSearchConfig,

    /// Candidate generator configuration
    #[serde(default)]
    pub candidates: CandidateConfig,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
