//! Vector Search Provider Implementations
//!
//! Answers approximate nearest-neighbor queries over the pre-embedded
//! catalog. All providers validate the query locally before any I/O and
//! return results in descending similarity order exactly as ranked by
//! the underlying index.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | MongoVectorSearchProvider | Atlas `$vectorSearch` | Complete (optional) |
//! | InMemoryVectorSearchProvider | Dev/testing | Complete |
//! | NullVectorSearchProvider | Testing | Complete |

pub mod in_memory;
#[cfg(feature = "vectorstore-mongodb")]
pub mod mongodb;
pub mod null;

pub use in_memory::InMemoryVectorSearchProvider;
#[cfg(feature = "vectorstore-mongodb")]
pub use mongodb::MongoVectorSearchProvider;
pub use null::NullVectorSearchProvider;

use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::error::{Error, Result};

/// Validate a search request before any network or index work
///
/// Rejects wrong-dimension query vectors and a zero `top_k`
/// synchronously; nothing is ever sent to the store for these.
pub(crate) fn validate_query(query_vector: &[f32], top_k: usize) -> Result<()> {
    if query_vector.len() != EMBEDDING_DIMENSION {
        return Err(Error::dimension_mismatch(
            EMBEDDING_DIMENSION,
            query_vector.len(),
        ));
    }
    if top_k == 0 {
        return Err(Error::invalid_argument("top_k must be at least 1"));
    }
    Ok(())
}
