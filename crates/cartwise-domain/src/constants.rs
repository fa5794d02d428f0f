//! Domain layer constants
//!
//! Constants that are part of the recommendation domain logic and are
//! shared by the application layer and the providers. Provider-specific
//! constants live in `cartwise-providers`.

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Dimensionality of catalog embeddings (all-MiniLM-L6-v2 family)
pub const EMBEDDING_DIMENSION: usize = 384;

// ============================================================================
// CANDIDATE GENERATION CONSTANTS
// ============================================================================

/// Maximum number of complementary candidates requested from the generator
pub const MAX_CANDIDATE_SUGGESTIONS: usize = 5;

/// Nominal lower bound the prompt asks the model to respect for scores
pub const CANDIDATE_SCORE_NOMINAL_FLOOR: f64 = 0.80;

/// Hard range enforced on candidate scores during validation
pub const CANDIDATE_SCORE_HARD_RANGE: (f64, f64) = (0.0, 1.0);

// ============================================================================
// VECTOR SEARCH CONSTANTS
// ============================================================================

/// Multiplier applied to `top_k` when sizing the ANN candidate pool
pub const CANDIDATE_POOL_MULTIPLIER: usize = 10;

/// Minimum ANN candidate pool size regardless of `top_k`
pub const CANDIDATE_POOL_MIN: usize = 50;

/// Default number of catalog matches retrieved per generated candidate
pub const DEFAULT_TOP_K_PER_CANDIDATE: usize = 1;

/// Compute the ANN candidate pool size for a given `top_k`
///
/// The pool is deliberately larger than `top_k` to give the approximate
/// index room for an accurate final top-k.
pub fn candidate_pool_size(top_k: usize) -> usize {
    std::cmp::max(top_k * CANDIDATE_POOL_MULTIPLIER, CANDIDATE_POOL_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_floors_at_minimum() {
        assert_eq!(candidate_pool_size(1), 50);
        assert_eq!(candidate_pool_size(4), 50);
        assert_eq!(candidate_pool_size(5), 50);
    }

    #[test]
    fn pool_size_scales_with_top_k() {
        assert_eq!(candidate_pool_size(6), 60);
        assert_eq!(candidate_pool_size(100), 1000);
    }
}
