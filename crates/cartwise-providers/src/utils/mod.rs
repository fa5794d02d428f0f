//! Shared provider utilities

/// HTTP response handling helpers
pub mod http_response;

pub use http_response::HttpResponseUtils;
