//! Catalog and Recommendation Value Objects
//!
//! The catalog corpus is owned by the vector store and is read-only to
//! this system; records are created once by an external ingestion
//! collaborator and never mutated here.

use serde::{Deserialize, Serialize};

/// Value Object: Pre-Embedded Catalog Record
///
/// A purchasable product as persisted in the document store. The identity
/// key is an opaque stable string (BSON object ids are rendered to string
/// on read; no numeric coercion is performed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable unique identity
    pub id: String,
    /// Display name
    pub name: String,
    /// Dense embedding of the product text, fixed model dimension
    pub embedding: Vec<f32>,
}

/// Value Object: Grounded Recommendation
///
/// One real catalog item matched to one generated candidate suggestion.
/// The final recommendation list is ordered by the originating candidate's
/// rank, with the store's similarity score reported verbatim.
///
/// ## Example
///
/// ```rust
/// use cartwise_domain::value_objects::RecommendationResult;
///
/// let result = RecommendationResult {
///     product_id: "665f1a2b3c4d5e6f70819283".to_string(),
///     product_name: "Slim Straight Jeans".to_string(),
///     similarity_score: 0.87,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    /// Identity of the matched catalog item
    pub product_id: String,
    /// Display name of the matched catalog item
    pub product_name: String,
    /// Store-reported similarity (higher is more similar, store-scaled)
    pub similarity_score: f64,
}
