//! Config-driven provider construction
//!
//! Builds the provider set selected by [`AppConfig`] and assembles the
//! recommendation service. Providers are matched by name; an unknown
//! name is a configuration error at startup, never a runtime fallback.
//!
//! The MongoDB client is connected by the host process and injected
//! here; wiring never opens network connections to the store itself.

use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::Document;
use tracing::info;

use cartwise_application::RecommendationService;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::{CandidateGenerator, EmbeddingProvider, VectorSearchProvider};
use cartwise_providers::candidates::{GeminiCandidateGenerator, StaticCandidateGenerator};
use cartwise_providers::embedding::{FastEmbedProvider, NullEmbeddingProvider};
use cartwise_providers::vector_search::{
    InMemoryVectorSearchProvider, MongoVectorSearchProvider, NullVectorSearchProvider,
};

use crate::config::{AppConfig, CandidateConfig, EmbeddingConfig, VectorSearchConfig};
use crate::error_ext::ErrorContext;

/// Build the embedding provider named in the configuration
pub fn build_embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider: Arc<dyn EmbeddingProvider> = match config.provider.as_str() {
        "fastembed" => {
            // Only the default all-MiniLM-L6-v2 family is supported; a
            // different model would change the catalog's vector space.
            if let Some(model) = &config.model {
                if model != "all-minilm-l6-v2" {
                    return Err(Error::configuration(format!(
                        "Unsupported embedding model: {model}"
                    )));
                }
            }
            Arc::new(FastEmbedProvider::initialize())
        }
        "null" => Arc::new(NullEmbeddingProvider::new()),
        other => {
            return Err(Error::configuration(format!(
                "Unknown embedding provider: {other}"
            )));
        }
    };

    info!(
        provider = provider.provider_name(),
        available = provider.is_available(),
        dimensions = provider.dimensions(),
        "embedding provider wired"
    );
    Ok(provider)
}

/// Build the candidate generator named in the configuration
pub fn build_candidate_generator(config: &CandidateConfig) -> Result<Arc<dyn CandidateGenerator>> {
    let generator: Arc<dyn CandidateGenerator> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    Error::configuration("Gemini candidate provider requires an API key")
                })?;

            let timeout = Duration::from_secs(config.timeout_secs);
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .network_context("Failed to build HTTP client")?;

            let mut generator =
                GeminiCandidateGenerator::new(api_key.to_string(), client).with_timeout(timeout);
            if let Some(model) = &config.model {
                generator = generator.with_model(model.clone());
            }
            if let Some(base_url) = &config.base_url {
                generator = generator.with_base_url(base_url.clone());
            }
            Arc::new(generator)
        }
        "static" => Arc::new(StaticCandidateGenerator::empty()),
        other => {
            return Err(Error::configuration(format!(
                "Unknown candidate provider: {other}"
            )));
        }
    };

    info!(
        provider = generator.provider_name(),
        "candidate generator wired"
    );
    Ok(generator)
}

/// Build a self-contained vector search provider
///
/// Handles the providers that need no external connection. The
/// `mongodb` provider requires an injected collection; use
/// [`build_mongo_vector_search`] for it.
pub fn build_vector_search_provider(
    config: &VectorSearchConfig,
) -> Result<Arc<dyn VectorSearchProvider>> {
    let provider: Arc<dyn VectorSearchProvider> = match config.provider.as_str() {
        "in-memory" => Arc::new(InMemoryVectorSearchProvider::empty()),
        "null" => Arc::new(NullVectorSearchProvider::new()),
        "mongodb" => {
            return Err(Error::configuration(
                "mongodb vector search requires an injected client; use build_mongo_vector_search",
            ));
        }
        other => {
            return Err(Error::configuration(format!(
                "Unknown vector search provider: {other}"
            )));
        }
    };

    info!(
        provider = provider.provider_name(),
        "vector search provider wired"
    );
    Ok(provider)
}

/// Build the Atlas vector search provider over an injected client
pub fn build_mongo_vector_search(
    config: &VectorSearchConfig,
    client: &mongodb::Client,
) -> Arc<dyn VectorSearchProvider> {
    let collection = client
        .database(&config.database)
        .collection::<Document>(&config.collection);

    let provider = MongoVectorSearchProvider::new(collection)
        .with_index_name(config.index_name.clone())
        .with_vector_field(config.vector_field.clone());

    info!(
        database = %config.database,
        collection = %config.collection,
        index = %config.index_name,
        "vector search provider wired"
    );
    Arc::new(provider)
}

/// Assemble the recommendation service from configuration
///
/// The vector search provider is passed in separately since its
/// construction may involve an external connection the host owns.
pub fn build_recommendation_service(
    config: &AppConfig,
    vector_search: Arc<dyn VectorSearchProvider>,
) -> Result<RecommendationService> {
    let candidate_generator = build_candidate_generator(&config.providers.candidates)?;
    let embedding_provider = build_embedding_provider(&config.providers.embedding)?;

    Ok(RecommendationService::new(
        candidate_generator,
        embedding_provider,
        vector_search,
    ))
}
