//! Application Layer - Cartwise
//!
//! Implements the recommendation use case, orchestrating the domain ports
//! according to Clean Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the `RecommendationService` use case
//! - Depends only on `cartwise-domain` ports, never on concrete providers
//! - Owns the partial-failure policy: individual candidate grounding
//!   failures are recovered locally, generator failures abort the
//!   operation
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cartwise-domain`: ports, value objects and the error taxonomy
//! - Pure Rust libraries for async orchestration

pub mod use_cases;

pub use use_cases::*;
