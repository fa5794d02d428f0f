//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for
//! local embedding generation. Uses ONNX models for inference without
//! external API calls.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use cartwise_domain::constants::EMBEDDING_DIMENSION;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::EmbeddingProvider;
use cartwise_domain::value_objects::Embedding;

/// Messages for the FastEmbed actor
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// Provider state: a ready actor channel, or the captured init failure
enum ProviderState {
    Ready(mpsc::Sender<FastEmbedMessage>),
    Unavailable(String),
}

/// FastEmbed local embedding provider using Actor pattern
///
/// Uses the Actor pattern to eliminate locks and ensure thread-safe
/// access to the underlying ONNX model. The model is initialized once and
/// processes embedding requests through a channel.
///
/// Model initialization failure is not a constructor error: the provider
/// enters a process-wide degraded mode where `is_available()` reports
/// `false` and every call returns `ModelUnavailable`, so callers can
/// check once and short-circuit.
///
/// ## Example
///
/// ```rust,no_run
/// use cartwise_providers::embedding::FastEmbedProvider;
/// use cartwise_domain::ports::EmbeddingProvider;
///
/// let provider = FastEmbedProvider::initialize();
/// if !provider.is_available() {
///     // degraded mode: recommendation requests will be refused upfront
/// }
/// ```
pub struct FastEmbedProvider {
    state: ProviderState,
    model_name: String,
}

impl FastEmbedProvider {
    /// Initialize with the default model (AllMiniLML6V2, 384 dimensions)
    pub fn initialize() -> Self {
        Self::with_model(EmbeddingModel::AllMiniLML6V2)
    }

    /// Initialize with a specific model
    pub fn with_model(model: EmbeddingModel) -> Self {
        let init_options = InitOptions::new(model).with_show_download_progress(false);
        Self::with_options(init_options)
    }

    /// Initialize with custom initialization options
    pub fn with_options(init_options: InitOptions) -> Self {
        let model_name = format!("{:?}", init_options.model_name);
        let state = match TextEmbedding::try_new(init_options) {
            Ok(text_embedding) => {
                let (tx, rx) = mpsc::channel(100);
                let mut actor = FastEmbedActor::new(rx, text_embedding, model_name.clone());
                tokio::spawn(async move {
                    actor.run().await;
                });
                ProviderState::Ready(tx)
            }
            Err(e) => {
                let message = format!("FastEmbed model initialization failed: {e}");
                warn!(model = %model_name, error = %e, "embedding provider entering degraded mode");
                ProviderState::Unavailable(message)
            }
        };

        Self { state, model_name }
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let sender = match &self.state {
            ProviderState::Ready(sender) => sender,
            ProviderState::Unavailable(message) => {
                return Err(Error::model_unavailable(message.clone()));
            }
        };

        if let Some(position) = texts.iter().position(|t| t.trim().is_empty()) {
            return Err(Error::empty_input(format!(
                "text at batch position {position}"
            )));
        }

        let (tx, rx) = oneshot::channel();
        sender
            .send(FastEmbedMessage::EmbedBatch {
                texts: texts.to_vec(),
                tx,
            })
            .await
            .map_err(|_| Error::model_unavailable("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::model_unavailable("FastEmbed actor closed")))
    }

    fn is_available(&self) -> bool {
        matches!(self.state, ProviderState::Ready(_))
    }

    fn dimensions(&self) -> usize {
        // AllMiniLML6V2 has 384 dimensions
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

/// Internal actor that processes embedding requests
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedMessage>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    fn new(
        receiver: mpsc::Receiver<FastEmbedMessage>,
        model: TextEmbedding,
        model_name: String,
    ) -> Self {
        Self {
            receiver,
            model,
            model_name,
        }
    }

    async fn run(&mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FastEmbedMessage::EmbedBatch { texts, tx } => {
                    let text_refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
                    let result = match self.model.embed(text_refs, None) {
                        Ok(vectors) => vectors
                            .into_iter()
                            .map(|v| {
                                // Wrong-length model output is a hard failure
                                Embedding::checked(v, &self.model_name, EMBEDDING_DIMENSION)
                            })
                            .collect::<Result<Vec<_>>>(),
                        Err(e) => Err(Error::internal(format!("FastEmbed inference failed: {e}"))),
                    };
                    let _ = tx.send(result);
                }
            }
        }
    }
}
