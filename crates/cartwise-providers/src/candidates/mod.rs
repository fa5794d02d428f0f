//! Candidate Generation Provider Implementations
//!
//! Proposes named complementary items for a product, constrained to the
//! caller's category taxonomy. The raw generative output is validated
//! against a fixed schema and re-sorted by score before it leaves this
//! module; the model's own ordering is never trusted.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | GeminiCandidateGenerator | Cloud | Complete |
//! | StaticCandidateGenerator | Testing | Complete |

pub mod gemini;
pub mod prompt;
pub mod static_gen;

pub use gemini::GeminiCandidateGenerator;
pub use static_gen::StaticCandidateGenerator;
