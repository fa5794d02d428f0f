use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{CandidateSuggestion, CategoryTaxonomy};

/// Complementary Candidate Generation Interface
///
/// Contract for generative providers that propose named complementary
/// items for a product, constrained to a caller-supplied category
/// taxonomy.
///
/// # Contract
///
/// - `product_name` must be non-empty; otherwise
///   [`crate::error::Error::EmptyInput`].
/// - At most [`crate::constants::MAX_CANDIDATE_SUGGESTIONS`] suggestions
///   are returned; the raw response is validated against the fixed schema
///   (name, description, score in [0, 1]) and any violation is
///   [`crate::error::Error::MalformedResponse`] — no partial repair, no
///   retry at this layer.
/// - The returned list is sorted by descending score regardless of the
///   order the model emitted; the model's ordering is not trusted.
/// - Results are not cached; different outputs for identical inputs
///   across calls are accepted non-determinism.
#[async_trait]
pub trait CandidateGenerator: Send + Sync {
    /// Propose complementary items for `product_name` within `taxonomy`
    async fn generate(
        &self,
        product_name: &str,
        taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<CandidateSuggestion>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
