use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::RecommendationResult;

/// Catalog Vector Search Interface
///
/// Contract for stores that answer approximate nearest-neighbor queries
/// over the pre-embedded catalog. The store owns the catalog corpus
/// exclusively; this port is read-only — ingestion is an external
/// collaborator writing records with embeddings already computed.
///
/// # Contract
///
/// - `query_vector` must match the store's indexed dimension; a mismatch
///   is [`crate::error::Error::DimensionMismatch`] and is raised before
///   any network I/O.
/// - `top_k` must be at least 1; zero is
///   [`crate::error::Error::InvalidArgument`], also raised synchronously.
/// - Implementations request a candidate pool of
///   [`crate::constants::candidate_pool_size`] entries from the index
///   before narrowing to `top_k`, improving ANN recall.
/// - Results come back in descending similarity-score order exactly as
///   the index ranked them; callers preserve that order verbatim.
/// - Connectivity failures ([`crate::error::Error::StoreUnavailable`])
///   and query-execution failures ([`crate::error::Error::QueryError`])
///   are distinguished; both are non-fatal to the recommendation
///   operation as a whole.
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Find the `top_k` catalog items most similar to `query_vector`
    async fn search(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
