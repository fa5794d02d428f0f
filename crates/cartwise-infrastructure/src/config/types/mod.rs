//! Configuration types module

pub mod app;
pub mod logging;
pub mod providers;

pub use app::{AppConfig, ProvidersConfig};
pub use logging::LoggingConfig;
pub use providers::{CandidateConfig, EmbeddingConfig, VectorSearchConfig};
