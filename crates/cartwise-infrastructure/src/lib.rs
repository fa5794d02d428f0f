//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and
//! domain layers. All adapters/providers live in `cartwise-providers`;
//! this crate loads configuration, sets up logging, and wires the
//! provider set into a ready [`cartwise_application::RecommendationService`].
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Pipeline health probes |
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`wiring`] | Config-driven provider construction |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;
pub mod wiring;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
