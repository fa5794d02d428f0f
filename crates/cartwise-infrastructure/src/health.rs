//! Pipeline health probes
//!
//! Exercises each wired provider once so a deployment can verify the
//! recommendation pipeline end to end before serving traffic. The vector
//! store is probed with a valid zero vector, mirroring a ping: the result
//! set is irrelevant, only that the store answers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::ports::{EmbeddingProvider, VectorSearchProvider};

use crate::logging::log_health_check;

/// Health status of one probed component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Component is fully operational
    Up,
    /// Component is down
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the component is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Result of probing one pipeline component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    /// Component name (provider name)
    pub name: String,
    /// Probe outcome
    pub status: HealthStatus,
    /// Probe duration in milliseconds
    pub response_time_ms: u64,
    /// Error message when the probe failed
    pub error: Option<String>,
}

/// Aggregated pipeline health
#[derive(Debug, Clone, Serialize)]
pub struct PipelineHealth {
    /// Overall status: `Up` only when every component is up
    pub status: HealthStatus,
    /// Per-component results
    pub components: Vec<ComponentHealth>,
}

/// Probe the embedding provider and vector store
///
/// The candidate generator is deliberately not probed; a probe would
/// spend a billable generation call on synthetic input.
pub async fn check_pipeline(
    embedding: &Arc<dyn EmbeddingProvider>,
    vector_search: &Arc<dyn VectorSearchProvider>,
) -> PipelineHealth {
    let embedding_health = probe_embedding(embedding).await;
    let store_health = probe_vector_search(vector_search).await;

    let status = if embedding_health.status.is_healthy() && store_health.status.is_healthy() {
        HealthStatus::Up
    } else {
        HealthStatus::Down
    };

    PipelineHealth {
        status,
        components: vec![embedding_health, store_health],
    }
}

async fn probe_embedding(embedding: &Arc<dyn EmbeddingProvider>) -> ComponentHealth {
    let start = Instant::now();
    let outcome = embedding.health_check().await;
    component_health(embedding.provider_name(), start, outcome.err())
}

async fn probe_vector_search(vector_search: &Arc<dyn VectorSearchProvider>) -> ComponentHealth {
    let start = Instant::now();
    let probe = vec![0.0_f32; EMBEDDING_DIMENSION];
    let outcome = vector_search.search(&probe, 1).await;
    component_health(vector_search.provider_name(), start, outcome.err())
}

fn component_health(
    name: &str,
    start: Instant,
    error: Option<cartwise_domain::error::Error>,
) -> ComponentHealth {
    let error = error.map(|e| e.to_string());
    log_health_check(name, error.is_none(), error.as_deref());
    ComponentHealth {
        name: name.to_string(),
        status: if error.is_none() {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        },
        response_time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        error,
    }
}
