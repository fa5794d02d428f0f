//! Centralized infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CARTWISE";

/// Environment variable consulted for the tracing filter
pub const LOG_FILTER_ENV: &str = "CARTWISE_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cartwise.toml";

/// Default configuration directory (relative to the working directory)
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default Gemini request timeout in seconds
pub const DEFAULT_CANDIDATE_TIMEOUT_SECS: u64 = 30;
