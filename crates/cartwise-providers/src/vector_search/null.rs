//! Null vector search provider for testing
//!
//! Validates requests like a real store but never returns a match,
//! modelling an empty catalog.

use async_trait::async_trait;

use cartwise_domain::error::Result;
use cartwise_domain::ports::VectorSearchProvider;
use cartwise_domain::value_objects::RecommendationResult;

use super::validate_query;

/// Null vector search provider
///
/// Every valid search returns an empty result set.
pub struct NullVectorSearchProvider;

impl NullVectorSearchProvider {
    /// Create a new null vector search provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullVectorSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorSearchProvider for NullVectorSearchProvider {
    async fn search(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        validate_query(query_vector, top_k)?;
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
