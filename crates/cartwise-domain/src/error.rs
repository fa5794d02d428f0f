//! Error handling types
//!
//! One failure taxonomy for the whole pipeline. Callers distinguish
//! retryable conditions (store unreachable, timeouts) from permanent ones
//! (malformed responses, shape violations) via [`Error::is_retryable`].

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Cartwise recommendation pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or whitespace-only input where text was required
    #[error("Empty input: {context}")]
    EmptyInput {
        /// What the input was meant to be
        context: String,
    },

    /// The embedding model never initialized; process-wide degraded mode
    #[error("Embedding model unavailable: {message}")]
    ModelUnavailable {
        /// Description of the initialization failure
        message: String,
    },

    /// Model output had an unexpected rank or dimensionality
    #[error("Embedding shape mismatch: expected {expected} dimensions, got {actual}")]
    ShapeMismatch {
        /// Expected vector length
        expected: usize,
        /// Length actually produced
        actual: usize,
    },

    /// Query vector rejected before any network call
    #[error("Query vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the store is indexed for
        expected: usize,
        /// Dimension of the supplied vector
        actual: usize,
    },

    /// Vector store could not be reached
    #[error("Vector store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the connectivity failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Vector store reached but the query itself failed
    #[error("Vector search query failed: {message}")]
    QueryError {
        /// Description of the query failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generative response violated the candidate schema
    #[error("Malformed generator response: {message}")]
    MalformedResponse {
        /// Which part of the schema was violated
        message: String,
    },

    /// A bounded remote call exceeded its deadline
    #[error("Operation timed out: {operation}")]
    Timeout {
        /// The remote call that timed out
        operation: String,
    },

    /// Invalid argument provided to a public operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Network-level failure talking to a remote API
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Taxonomy constructors
impl Error {
    /// Create an empty-input error
    pub fn empty_input<S: Into<String>>(context: S) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }

    /// Create a model-unavailable error
    pub fn model_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ModelUnavailable {
            message: message.into(),
        }
    }

    /// Create a shape-mismatch error
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create a dimension-mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a store-unavailable error
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store-unavailable error with source
    pub fn store_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a query error
    pub fn query<S: Into<String>>(message: S) -> Self {
        Self::QueryError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a query error with source
    pub fn query_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::QueryError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether retrying the same call could plausibly succeed
    ///
    /// Connectivity losses and timeouts are transient; schema and shape
    /// violations are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::Timeout { .. } | Self::Io { .. }
        )
    }
}
