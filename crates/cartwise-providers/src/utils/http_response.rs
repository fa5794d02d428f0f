//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use cartwise_domain::error::{Error, Result};
use reqwest::Response;

/// Format a network error for an API provider
fn api_error(provider: &str, context: &str, details: &str) -> Error {
    Error::network(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by API providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::error_for_status(
                provider_name,
                status.as_u16(),
                &error_text,
            ));
        }

        response
            .json()
            .await
            .map_err(|e| api_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a non-success status code onto the failure taxonomy
    ///
    /// Gateway and request timeouts become [`Error::Timeout`]; everything
    /// else is a network-level failure.
    fn error_for_status(provider_name: &str, code: u16, error_text: &str) -> Error {
        match code {
            401 => api_error(provider_name, "authentication failed", error_text),
            408 | 504 => Error::timeout(format!("{provider_name} request ({code})")),
            429 => api_error(provider_name, "rate limit exceeded", error_text),
            500..=599 => api_error(provider_name, &format!("server error ({code})"), error_text),
            _ => api_error(
                provider_name,
                &format!("request failed ({code})"),
                error_text,
            ),
        }
    }
}
