//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::EmbeddingProvider;
use cartwise_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_MODEL_NULL;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors filled with deterministic values based on
/// input text hash. Useful for unit tests and development without
/// requiring an actual embedding model.
///
/// # Example
///
/// ```rust
/// use cartwise_providers::embedding::NullEmbeddingProvider;
/// use cartwise_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if let Some(position) = texts.iter().position(|t| t.trim().is_empty()) {
            return Err(Error::empty_input(format!(
                "text at batch position {position}"
            )));
        }

        let embeddings = texts
            .iter()
            .map(|text| {
                // Deterministic test embedding based on text hash
                let hash = text.chars().map(|c| c as u32).sum::<u32>();
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION)
                    .map(|j| {
                        let variation = (j as f32 * 0.01).sin();
                        (base_value + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding {
                    vector,
                    model: EMBEDDING_MODEL_NULL.to_string(),
                    dimensions: EMBEDDING_DIMENSION,
                }
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embeddings_are_deterministic_and_fixed_length() {
        let provider = NullEmbeddingProvider::new();
        let a = provider.embed("denim jeans").await.unwrap();
        let b = provider.embed("denim jeans").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vector.len(), EMBEDDING_DIMENSION);
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_success() {
        let provider = NullEmbeddingProvider::new();
        let err = provider.embed("   ").await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }

    #[tokio::test]
    async fn batch_rejects_blank_entries() {
        let provider = NullEmbeddingProvider::new();
        let err = provider
            .embed_batch(&["fine".to_string(), String::new()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }
}
