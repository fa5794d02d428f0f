use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Contract for providers that map text to fixed-dimension dense vectors.
/// Used on the query path (embedding candidate text) and by ingestion
/// collaborators (embedding catalog records in batch).
///
/// # Contract
///
/// - Empty or whitespace-only input is rejected with [`Error::EmptyInput`]
///   before any model call.
/// - A provider whose model failed to initialize reports
///   `is_available() == false` and returns [`Error::ModelUnavailable`]
///   from every call; callers check availability once per operation and
///   short-circuit.
/// - A successful `embed` returns exactly `dimensions()` floats; any other
///   output shape is [`Error::ShapeMismatch`], never coerced.
/// - Embedding is deterministic for a fixed model version and input.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item and rejects
/// batched output of any other size as a shape violation. Providers only
/// implement `embed_batch()` unless single-item optimization is needed.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(Error::empty_input("text to embed"));
        }
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        if embeddings.len() != 1 {
            // Batched output for a single input is a shape violation
            return Err(Error::shape_mismatch(1, embeddings.len()));
        }
        let embedding = embeddings.remove(0);
        if embedding.vector.len() != self.dimensions() {
            return Err(Error::shape_mismatch(
                self.dimensions(),
                embedding.vector.len(),
            ));
        }
        Ok(embedding)
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Whether the underlying model initialized successfully
    ///
    /// `false` means process-wide degraded mode: every call will return
    /// [`Error::ModelUnavailable`].
    fn is_available(&self) -> bool {
        true
    }

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
