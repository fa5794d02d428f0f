//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings used on both the
//! ingestion (write) and query (read) paths.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic
/// meaning. Embeddings are the bridge between free-text candidate
/// suggestions and real catalog items.
///
/// ## Business Rules
///
/// - `vector.len()` always equals `dimensions`
/// - A wrong-length vector is a hard failure, never truncated or padded
///
/// ## Example
///
/// ```rust
/// use cartwise_domain::value_objects::Embedding;
///
/// let embedding = Embedding::checked(vec![0.1, 0.2, 0.3], "all-MiniLM-L6-v2", 3).unwrap();
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, enforcing the dimension invariant
    ///
    /// Returns [`Error::ShapeMismatch`] when the vector length differs
    /// from `expected_dimensions`.
    pub fn checked<S: Into<String>>(
        vector: Vec<f32>,
        model: S,
        expected_dimensions: usize,
    ) -> Result<Self> {
        if vector.len() != expected_dimensions {
            return Err(Error::shape_mismatch(expected_dimensions, vector.len()));
        }
        Ok(Self {
            vector,
            model: model.into(),
            dimensions: expected_dimensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_exact_length() {
        let e = Embedding::checked(vec![0.0; 384], "m", 384).unwrap();
        assert_eq!(e.vector.len(), 384);
        assert_eq!(e.dimensions, 384);
    }

    #[test]
    fn checked_rejects_short_vector() {
        let err = Embedding::checked(vec![0.0; 383], "m", 384).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 384,
                actual: 383
            }
        ));
    }

    #[test]
    fn checked_rejects_long_vector() {
        let err = Embedding::checked(vec![0.0; 768], "m", 384).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { actual: 768, .. }));
    }
}
