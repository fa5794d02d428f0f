//! Candidate-Generation Value Objects
//!
//! Transient objects produced per query by the candidate generator.
//! Nothing here is persisted or cached; identical inputs may produce
//! different generative outputs across calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value Object: LLM-Proposed Complementary Item
///
/// One named suggestion emitted by the generative model, before grounding
/// against the catalog.
///
/// ## Business Rules
///
/// - `score` lies in the hard range [0.0, 1.0]; the prompt nominally asks
///   for [0.80, 1.00] but consumers tolerate the full range
/// - Suggestions are always consumed in descending-score order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateSuggestion {
    /// Specific item type (e.g. "Comfort Fit Denim Jeans")
    pub product_name: String,
    /// One-to-two line description of the item itself
    pub description: String,
    /// Complementary relevance score
    pub score: f64,
}

/// Value Object: Category Taxonomy
///
/// Caller-supplied mapping from category name to allowed item-type labels,
/// constraining what the generator may propose. Read-only per query.
///
/// Backed by a `BTreeMap` so prompt rendering is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryTaxonomy(pub BTreeMap<String, Vec<String>>);

impl CategoryTaxonomy {
    /// Build a taxonomy from (category, labels) pairs
    pub fn from_entries<I, S, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = S>,
    {
        Self(
            entries
                .into_iter()
                .map(|(category, labels)| {
                    (
                        category.into(),
                        labels.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Whether the taxonomy has no categories at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate categories in deterministic (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

/// Re-sort candidate suggestions by descending score
///
/// The generator's own ordering is not trusted; this runs on every raw
/// response. The sort is stable, so equal-score candidates keep their
/// relative model order, and re-applying it is a no-op.
pub fn sort_candidates(mut candidates: Vec<CandidateSuggestion>) -> Vec<CandidateSuggestion> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}
