//! Recommendation use case integration tests
//!
//! Exercises the full orchestration against hand-rolled fakes plus the
//! real in-memory providers. The keyword embedding fake maps known
//! tokens onto basis vectors so cosine similarity behaves predictably.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use cartwise_application::RecommendationService;
use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::{CandidateGenerator, EmbeddingProvider, VectorSearchProvider};
use cartwise_domain::value_objects::{
    CandidateSuggestion, CatalogItem, CategoryTaxonomy, Embedding, RecommendationResult,
};
use cartwise_providers::candidates::StaticCandidateGenerator;
use cartwise_providers::vector_search::InMemoryVectorSearchProvider;

fn suggestion(name: &str, description: &str, score: f64) -> CandidateSuggestion {
    CandidateSuggestion {
        product_name: name.to_string(),
        description: description.to_string(),
        score,
    }
}

fn taxonomy() -> CategoryTaxonomy {
    CategoryTaxonomy::from_entries([
        ("Apparel", vec!["Jeans", "Shorts", "Jackets"]),
        ("Accessories", vec!["Sneakers", "Caps", "Belts"]),
    ])
}

/// Basis vector with a single hot axis
fn basis_vector(axis: usize) -> Vec<f32> {
    let mut vector = vec![0.0_f32; EMBEDDING_DIMENSION];
    vector[axis] = 1.0;
    vector
}

/// Keyword tokens recognized by the embedding fake, one axis each
const KEYWORDS: [&str; 4] = ["jeans", "sneakers", "belt", "cap"];

/// Embedding fake that projects text onto keyword basis vectors
///
/// Text mentioning a known keyword lands exactly on that keyword's axis,
/// so it has cosine similarity 1.0 with catalog items embedded on the
/// same axis and 0.0 with every other.
struct KeywordEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for KeywordEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                let axis = KEYWORDS
                    .iter()
                    .position(|keyword| lower.contains(keyword))
                    .unwrap_or(KEYWORDS.len());
                Embedding::checked(basis_vector(axis), "keyword-test", EMBEDDING_DIMENSION)
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "keyword-test"
    }
}

/// Embedding fake stuck in degraded mode
struct UnavailableEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for UnavailableEmbeddingProvider {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        Err(Error::model_unavailable("model never initialized"))
    }

    fn is_available(&self) -> bool {
        false
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "unavailable-test"
    }
}

/// Generator fake that counts invocations
struct CountingGenerator {
    calls: Arc<AtomicUsize>,
    candidates: Vec<CandidateSuggestion>,
}

#[async_trait]
impl CandidateGenerator for CountingGenerator {
    async fn generate(
        &self,
        _product_name: &str,
        _taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<CandidateSuggestion>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.candidates.clone())
    }

    fn provider_name(&self) -> &str {
        "counting-test"
    }
}

/// Generator fake that always fails
struct FailingGenerator;

#[async_trait]
impl CandidateGenerator for FailingGenerator {
    async fn generate(
        &self,
        _product_name: &str,
        _taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<CandidateSuggestion>> {
        Err(Error::network("generator endpoint unreachable"))
    }

    fn provider_name(&self) -> &str {
        "failing-test"
    }
}

/// Search fake that fails for exactly one query axis
///
/// Every other query returns a single match named after its hot axis.
struct FlakyAxisSearch {
    failing_axis: usize,
}

#[async_trait]
impl VectorSearchProvider for FlakyAxisSearch {
    async fn search(
        &self,
        query_vector: &[f32],
        _top_k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        let axis = query_vector
            .iter()
            .position(|v| *v > 0.5)
            .ok_or_else(|| Error::query("query vector has no hot axis"))?;

        if axis == self.failing_axis {
            return Err(Error::store_unavailable("connection reset by peer"));
        }

        Ok(vec![RecommendationResult {
            product_id: format!("id-{axis}"),
            product_name: format!("item-{axis}"),
            similarity_score: 0.9,
        }])
    }

    fn provider_name(&self) -> &str {
        "flaky-test"
    }
}

/// Catalog snapshot with one product per keyword axis
fn seeded_catalog() -> InMemoryVectorSearchProvider {
    let items = vec![
        CatalogItem {
            id: "prod-1001".to_string(),
            name: "Slim Straight Jeans".to_string(),
            embedding: basis_vector(0),
        },
        CatalogItem {
            id: "prod-1002".to_string(),
            name: "Canvas Sneakers".to_string(),
            embedding: basis_vector(1),
        },
        CatalogItem {
            id: "prod-1003".to_string(),
            name: "Braided Leather Belt".to_string(),
            embedding: basis_vector(2),
        },
    ];
    InMemoryVectorSearchProvider::new(items).unwrap()
}

#[tokio::test]
async fn zero_top_k_is_rejected_before_any_generation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = RecommendationService::new(
        Arc::new(CountingGenerator {
            calls: Arc::clone(&calls),
            candidates: vec![suggestion("Jeans", "denim", 0.9)],
        }),
        Arc::new(KeywordEmbeddingProvider),
        Arc::new(seeded_catalog()),
    );

    let err = service
        .recommend("Men's Casual Cotton T-Shirt", &taxonomy(), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unavailable_embedding_model_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = RecommendationService::new(
        Arc::new(CountingGenerator {
            calls: Arc::clone(&calls),
            candidates: vec![suggestion("Jeans", "denim", 0.9)],
        }),
        Arc::new(UnavailableEmbeddingProvider),
        Arc::new(seeded_catalog()),
    );

    let err = service
        .recommend_default("Men's Casual Cotton T-Shirt", &taxonomy())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ModelUnavailable { .. }));
    // Refused upfront: no generation call was spent
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn generator_failure_fails_the_whole_operation() {
    let service = RecommendationService::new(
        Arc::new(FailingGenerator),
        Arc::new(KeywordEmbeddingProvider),
        Arc::new(seeded_catalog()),
    );

    let err = service
        .recommend_default("Men's Casual Cotton T-Shirt", &taxonomy())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn one_grounding_failure_keeps_the_other_results_in_rank_order() {
    // Five candidates; the "belt" axis store lookup fails. Crew socks
    // match no keyword and land on the spare axis.
    let candidates = vec![
        suggestion("Comfort Fit Denim Jeans", "classic blue", 0.96),
        suggestion("White Casual Sneakers", "lightweight lace-up", 0.91),
        suggestion("Braided Leather Belt", "brown leather", 0.88),
        suggestion("Snapback Cap", "adjustable fit", 0.85),
        suggestion("Crew Socks", "soft ankle-length pair", 0.82),
    ];
    let service = RecommendationService::new(
        Arc::new(StaticCandidateGenerator::new(candidates)),
        Arc::new(KeywordEmbeddingProvider),
        Arc::new(FlakyAxisSearch { failing_axis: 2 }),
    );

    let results = service
        .recommend_default("Men's Casual Cotton T-Shirt", &taxonomy())
        .await
        .unwrap();

    let names: Vec<_> = results.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["item-0", "item-1", "item-3", "item-4"]);
}

#[tokio::test]
async fn empty_catalog_yields_an_empty_recommendation_list() {
    let service = RecommendationService::new(
        Arc::new(StaticCandidateGenerator::new(vec![suggestion(
            "Comfort Fit Denim Jeans",
            "classic blue",
            0.96,
        )])),
        Arc::new(KeywordEmbeddingProvider),
        Arc::new(InMemoryVectorSearchProvider::empty()),
    );

    let results = service
        .recommend_default("Men's Casual Cotton T-Shirt", &taxonomy())
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn tshirt_candidates_ground_onto_catalog_products_in_candidate_order() {
    let service = RecommendationService::new(
        Arc::new(StaticCandidateGenerator::new(vec![
            suggestion(
                "Comfort Fit Denim Jeans",
                "Classic blue jeans with a relaxed fit.",
                0.96,
            ),
            suggestion(
                "White Casual Sneakers",
                "Lightweight lace-up shoes for everyday wear.",
                0.91,
            ),
        ])),
        Arc::new(KeywordEmbeddingProvider),
        Arc::new(seeded_catalog()),
    );

    let results = service
        .recommend_default("Men's Casual Cotton T-Shirt", &taxonomy())
        .await
        .unwrap();

    // Candidate rank order survives grounding; similarity only picks the
    // best catalog match within each candidate
    let names: Vec<_> = results.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Slim Straight Jeans", "Canvas Sneakers"]);
    assert_eq!(results[0].product_id, "prod-1001");
    assert!(results.iter().all(|r| r.similarity_score > 0.9));
}
