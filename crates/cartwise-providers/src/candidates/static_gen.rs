//! Static candidate generator for testing and offline development
//!
//! Returns a canned suggestion list, run through the same descending-score
//! re-sort every real generator applies.

use async_trait::async_trait;

use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::CandidateGenerator;
use cartwise_domain::value_objects::{CandidateSuggestion, CategoryTaxonomy, sort_candidates};

/// Static candidate generator
///
/// Ignores the taxonomy and returns the configured suggestions for every
/// product. Input validation matches the real generators so orchestration
/// tests exercise the same paths.
pub struct StaticCandidateGenerator {
    suggestions: Vec<CandidateSuggestion>,
}

impl StaticCandidateGenerator {
    /// Create a generator that always returns `suggestions`
    pub fn new(suggestions: Vec<CandidateSuggestion>) -> Self {
        Self { suggestions }
    }

    /// Create a generator that returns no suggestions
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
        }
    }
}

#[async_trait]
impl CandidateGenerator for StaticCandidateGenerator {
    async fn generate(
        &self,
        product_name: &str,
        _taxonomy: &CategoryTaxonomy,
    ) -> Result<Vec<CandidateSuggestion>> {
        if product_name.trim().is_empty() {
            return Err(Error::empty_input("product name"));
        }
        Ok(sort_candidates(self.suggestions.clone()))
    }

    fn provider_name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_suggestions_sorted_by_score() {
        let generator = StaticCandidateGenerator::new(vec![
            CandidateSuggestion {
                product_name: "low".to_string(),
                description: "d".to_string(),
                score: 0.81,
            },
            CandidateSuggestion {
                product_name: "high".to_string(),
                description: "d".to_string(),
                score: 0.95,
            },
        ]);
        let out = generator
            .generate("T-Shirt", &CategoryTaxonomy::default())
            .await
            .unwrap();
        assert_eq!(out[0].product_name, "high");
    }

    #[tokio::test]
    async fn empty_product_name_is_rejected() {
        let generator = StaticCandidateGenerator::empty();
        let err = generator
            .generate("", &CategoryTaxonomy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }
}
