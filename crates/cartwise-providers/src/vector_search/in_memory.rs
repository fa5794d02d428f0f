//! In-memory vector search provider implementation
//!
//! Provides an in-process catalog search backend for development and
//! testing. The catalog snapshot is immutable after construction and is
//! not persisted.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use async_trait::async_trait;

use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::VectorSearchProvider;
use cartwise_domain::value_objects::{CatalogItem, RecommendationResult};

use super::validate_query;

/// In-memory vector search provider
///
/// Holds an immutable catalog snapshot and ranks it by cosine similarity.
/// Useful for development and testing where a real document store is not
/// available; exact search here stands in for the ANN index.
#[derive(Debug)]
pub struct InMemoryVectorSearchProvider {
    items: Vec<CatalogItem>,
}

impl InMemoryVectorSearchProvider {
    /// Create a provider over a catalog snapshot
    ///
    /// Every item must carry an embedding of the model dimension; a
    /// wrong-length embedding is rejected rather than silently skipped
    /// at query time.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        for item in &items {
            if item.embedding.len() != EMBEDDING_DIMENSION {
                return Err(Error::shape_mismatch(
                    EMBEDDING_DIMENSION,
                    item.embedding.len(),
                ));
            }
        }
        Ok(Self { items })
    }

    /// Create an empty provider (every search returns no results)
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

#[async_trait]
impl VectorSearchProvider for InMemoryVectorSearchProvider {
    async fn search(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        validate_query(query_vector, top_k)?;

        // Precompute query norm once (avoids redundant calculation per item)
        let query_norm = compute_norm(query_vector);

        // Min-heap for top-k selection: O(n log k) instead of O(n log n)
        let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(top_k + 1);

        for (i, item) in self.items.iter().enumerate() {
            let similarity = cosine_similarity_with_norm(query_vector, &item.embedding, query_norm);

            if heap.len() < top_k {
                heap.push(ScoredItem {
                    score: similarity,
                    index: i,
                });
            } else if let Some(min) = heap.peek() {
                if similarity > min.score {
                    heap.pop();
                    heap.push(ScoredItem {
                        score: similarity,
                        index: i,
                    });
                }
            }
        }

        // Extract results in descending score order
        let mut scored: Vec<_> = heap.into_iter().collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let results = scored
            .into_iter()
            .map(|entry| {
                let item = &self.items[entry.index];
                RecommendationResult {
                    product_id: item.id.clone(),
                    product_name: item.name.clone(),
                    similarity_score: f64::from(entry.score),
                }
            })
            .collect();

        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

/// Scored item for heap-based top-k selection
///
/// Uses reverse ordering so BinaryHeap acts as a min-heap (smallest
/// scores at top).
#[derive(PartialEq)]
struct ScoredItem {
    score: f32,
    index: usize,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: smallest at top
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm
///
/// Normalized to [0, 1] to match the positive score scale the document
/// store reports.
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis_item(id: &str, name: &str, axis: usize) -> CatalogItem {
        let mut embedding = vec![0.0; EMBEDDING_DIMENSION];
        embedding[axis] = 1.0;
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            embedding,
        }
    }

    fn axis_query(axis: usize) -> Vec<f32> {
        let mut v = vec![0.0; EMBEDDING_DIMENSION];
        v[axis] = 1.0;
        v
    }

    #[tokio::test]
    async fn returns_closest_item_first() {
        let provider = InMemoryVectorSearchProvider::new(vec![
            basis_item("1", "Slim Straight Jeans", 0),
            basis_item("2", "Canvas Sneakers", 1),
        ])
        .unwrap();

        let results = provider.search(&axis_query(0), 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].product_name, "Slim Straight Jeans");
        assert!(results[0].similarity_score > results[1].similarity_score);
    }

    #[tokio::test]
    async fn rejects_wrong_dimension_before_search() {
        let provider = InMemoryVectorSearchProvider::empty();
        let err = provider.search(&[0.5, 0.5], 1).await.unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: EMBEDDING_DIMENSION,
                actual: 2
            }
        ));
    }

    #[tokio::test]
    async fn rejects_zero_top_k() {
        let provider = InMemoryVectorSearchProvider::empty();
        let err = provider.search(&axis_query(0), 0).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_result() {
        let provider = InMemoryVectorSearchProvider::empty();
        let results = provider.search(&axis_query(0), 3).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn rejects_malformed_catalog_snapshot() {
        let bad = CatalogItem {
            id: "1".to_string(),
            name: "truncated".to_string(),
            embedding: vec![0.1; 10],
        };
        let err = InMemoryVectorSearchProvider::new(vec![bad]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { actual: 10, .. }));
    }
}
