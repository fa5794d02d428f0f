//! Gemini Candidate Generator
//!
//! Implements the CandidateGenerator port using Google's Gemini
//! `generateContent` API in JSON mode. The response text must parse into
//! the fixed candidate schema; anything else is rejected as a malformed
//! response with no partial repair and no retry at this layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use cartwise_domain::constants::{CANDIDATE_SCORE_HARD_RANGE, MAX_CANDIDATE_SUGGESTIONS};
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::CandidateGenerator;
use cartwise_domain::value_objects::{CandidateSuggestion, CategoryTaxonomy, sort_candidates};

use super::prompt::build_prompt;
use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_GENERATION_TIMEOUT, GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL,
    GEMINI_TEMPERATURE,
};
use crate::utils::HttpResponseUtils;

/// Gemini candidate generator
///
/// Receives its HTTP client via constructor injection. Each request
/// carries an explicit timeout; a timed-out call surfaces as
/// `Error::Timeout` on this candidate-generation path.
///
/// ## Example
///
/// ```rust,no_run
/// use cartwise_providers::candidates::GeminiCandidateGenerator;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let generator = GeminiCandidateGenerator::new(
///         "AIza-your-api-key".to_string(),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct GeminiCandidateGenerator {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiCandidateGenerator {
    /// Create a new Gemini candidate generator with default model and URL
    pub fn new(api_key: String, http_client: Client) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: GEMINI_DEFAULT_BASE_URL.to_string(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_GENERATION_TIMEOUT,
            http_client,
        }
    }

    /// Override the model name
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim().to_string();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the model name for this generator
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one generateContent call and return the raw API response
    async fn fetch_completion(&self, prompt: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": GEMINI_TEMPERATURE,
                "responseMimeType": "application/json",
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(format!("gemini generateContent after {:?}", self.timeout))
                } else {
                    Error::network_with_source("gemini request failed", e)
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "Gemini").await
    }

    /// Pull the generated JSON text out of the API envelope
    fn extract_text(response: &serde_json::Value) -> Result<&str> {
        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                Error::malformed_response("response envelope missing generated text part")
            })
    }
}

#[async_trait]
impl CandidateGenerator for GeminiCandidateGenerator {
    async fn generate(
        &self,
        product_name: &str,
        taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<CandidateSuggestion>> {
        if product_name.trim().is_empty() {
            return Err(Error::empty_input("product name"));
        }

        let prompt = build_prompt(product_name, taxonomy);
        let response = self.fetch_completion(&prompt).await?;
        let text = Self::extract_text(&response)?;
        parse_candidate_payload(text)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

/// Raw response schema (wire format)
#[derive(Debug, Deserialize)]
struct RawRecommendations {
    complementary_products: Vec<RawCandidate>,
}

/// One raw candidate entry as emitted by the model
#[derive(Debug, Deserialize)]
struct RawCandidate {
    product_name: String,
    product_description: String,
    score: f64,
}

/// Parse and validate the generated JSON payload
///
/// Enforces the fixed schema: at most
/// [`MAX_CANDIDATE_SUGGESTIONS`] entries, non-empty names, scores within
/// the hard [0, 1] range (the nominal 0.85 prompt floor is not enforced
/// here). The surviving list is re-sorted by descending score.
pub(crate) fn parse_candidate_payload(text: &str) -> Result<Vec<CandidateSuggestion>> {
    let raw: RawRecommendations = serde_json::from_str(text)
        .map_err(|e| Error::malformed_response(format!("schema violation: {e}")))?;

    if raw.complementary_products.len() > MAX_CANDIDATE_SUGGESTIONS {
        return Err(Error::malformed_response(format!(
            "expected at most {MAX_CANDIDATE_SUGGESTIONS} candidates, got {}",
            raw.complementary_products.len()
        )));
    }

    let (score_min, score_max) = CANDIDATE_SCORE_HARD_RANGE;
    let mut candidates = Vec::with_capacity(raw.complementary_products.len());
    for entry in raw.complementary_products {
        if entry.product_name.trim().is_empty() {
            return Err(Error::malformed_response("candidate with empty name"));
        }
        if !entry.score.is_finite() || entry.score < score_min || entry.score > score_max {
            return Err(Error::malformed_response(format!(
                "candidate '{}' score {} outside [{score_min}, {score_max}]",
                entry.product_name, entry.score
            )));
        }
        candidates.push(CandidateSuggestion {
            product_name: entry.product_name,
            description: entry.product_description,
            score: entry.score,
        });
    }

    Ok(sort_candidates(candidates))
}
