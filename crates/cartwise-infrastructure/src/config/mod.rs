//! Configuration management
//!
//! TOML + environment configuration loaded through figment, with typed
//! sections and validation before anything is wired.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CandidateConfig, EmbeddingConfig, LoggingConfig, ProvidersConfig,
    VectorSearchConfig,
};
