//! Recommendation Use Case
//!
//! Orchestrates the hybrid pipeline: generative candidate proposal, then
//! per-candidate grounding against the catalog via embedding + vector
//! search. The final list keeps the generator's rank order; vector
//! similarity only selects the best catalog match within each candidate.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use cartwise_domain::constants::DEFAULT_TOP_K_PER_CANDIDATE;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::{CandidateGenerator, EmbeddingProvider, VectorSearchProvider};
use cartwise_domain::value_objects::{
    CandidateSuggestion, CategoryTaxonomy, RecommendationResult,
};

/// Hybrid recommendation service
///
/// Combines LLM candidate generation with catalog-grounded vector search.
/// All collaborators are injected at construction and shared read-only,
/// so one instance serves concurrent requests without locking.
pub struct RecommendationService {
    candidate_generator: Arc<dyn CandidateGenerator>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_search: Arc<dyn VectorSearchProvider>,
}

impl RecommendationService {
    /// Create a new recommendation service with injected dependencies
    pub fn new(
        candidate_generator: Arc<dyn CandidateGenerator>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_search: Arc<dyn VectorSearchProvider>,
    ) -> Self {
        Self {
            candidate_generator,
            embedding_provider,
            vector_search,
        }
    }

    /// Recommend complementary catalog products for `product_name`
    ///
    /// Pipeline:
    /// 1. Generate up to five candidate suggestions constrained by
    ///    `taxonomy`; a generator failure fails the whole operation.
    /// 2. Ground each candidate independently and concurrently: embed the
    ///    candidate text, then search the catalog with
    ///    `top_k_per_candidate`.
    /// 3. Assemble surviving matches in the candidates' original rank
    ///    order. A candidate whose grounding fails is logged and skipped;
    ///    an empty final list is a valid outcome.
    pub async fn recommend(
        &self,
        product_name: &str,
        taxonomy: &CategoryTaxonomy,
        top_k_per_candidate: usize,
    ) -> Result<Vec<RecommendationResult>> {
        if top_k_per_candidate == 0 {
            return Err(Error::invalid_argument(
                "top_k_per_candidate must be at least 1",
            ));
        }

        // Availability is checked once per operation; without a working
        // embedding model no candidate can be grounded.
        if !self.embedding_provider.is_available() {
            return Err(Error::model_unavailable(
                "embedding provider reports unavailable",
            ));
        }

        let candidates = self
            .candidate_generator
            .generate(product_name, taxonomy)
            .await?;

        debug!(
            product = product_name,
            candidates = candidates.len(),
            "generated complementary candidates"
        );

        // Grounding lookups are independent; join_all yields results in
        // input order, so concurrency never leaks into result ordering.
        let groundings = join_all(
            candidates
                .iter()
                .map(|candidate| self.ground_candidate(candidate, top_k_per_candidate)),
        )
        .await;

        let mut recommendations = Vec::new();
        for (candidate, grounding) in candidates.iter().zip(groundings) {
            match grounding {
                Ok(matches) => recommendations.extend(matches),
                Err(error) => {
                    // Partial-failure policy: drop this candidate, keep going.
                    warn!(
                        candidate = %candidate.product_name,
                        error = %error,
                        "skipping candidate after grounding failure"
                    );
                }
            }
        }

        Ok(recommendations)
    }

    /// [`Self::recommend`] with the default of one catalog match per candidate
    pub async fn recommend_default(
        &self,
        product_name: &str,
        taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<RecommendationResult>> {
        self.recommend(product_name, taxonomy, DEFAULT_TOP_K_PER_CANDIDATE)
            .await
    }

    /// Ground one candidate suggestion onto real catalog items
    async fn ground_candidate(
        &self,
        candidate: &CandidateSuggestion,
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        let query_text = composite_query_text(candidate);
        let embedding = self.embedding_provider.embed(&query_text).await?;
        self.vector_search.search(&embedding.vector, top_k).await
    }
}

/// Build the search query text for a candidate
///
/// Name plus description, matching how catalog records were embedded.
fn composite_query_text(candidate: &CandidateSuggestion) -> String {
    format!("{} {}", candidate.product_name, candidate.description)
}
