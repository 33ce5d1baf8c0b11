//! Lazily initialized, shared embedding model resource.
//!
//! The embedding model is the one expensive shared resource in the
//! pipeline. The holder is constructed cheaply at process start and
//! passed by reference into the retrieval engine; the first call to
//! [`ModelHolder::provider`] loads the model under a single-entry lock,
//! concurrent callers block on that same initialization, and the
//! outcome — success or failure — is remembered for the process
//! lifetime so unavailability is reported without re-probing.

use std::sync::{Arc, OnceLock};

use clausal_core::config::EmbeddingConfig;
use clausal_core::errors::{ClausalResult, EmbeddingError};
use clausal_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

use crate::cache::CachedEmbedder;
use crate::providers::OnnxEmbedder;

/// Shared holder for the process-wide embedding provider.
pub struct ModelHolder {
    config: EmbeddingConfig,
    slot: OnceLock<Option<Arc<dyn IEmbeddingProvider>>>,
}

impl ModelHolder {
    /// Create a holder; no model is loaded until first use.
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            config,
            slot: OnceLock::new(),
        }
    }

    /// Create a holder around an already-built provider. Used by tests
    /// and callers that manage model loading themselves.
    pub fn with_provider(config: EmbeddingConfig, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        let slot = OnceLock::new();
        let _ = slot.set(Some(provider));
        Self { config, slot }
    }

    /// Get the shared provider, loading the model on first demand.
    ///
    /// Returns `EmbeddingError::ProviderUnavailable` when no model is
    /// configured or the one-time load failed.
    pub fn provider(&self) -> ClausalResult<Arc<dyn IEmbeddingProvider>> {
        let slot = self.slot.get_or_init(|| self.initialize());
        slot.clone().ok_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "onnx embedding model".to_string(),
            }
            .into()
        })
    }

    /// Whether a provider is (or could become) available without error.
    pub fn is_available(&self) -> bool {
        match self.slot.get() {
            Some(slot) => slot.is_some(),
            // Not yet initialized: available iff a model is configured.
            None => self.config.model_path.is_some(),
        }
    }

    fn initialize(&self) -> Option<Arc<dyn IEmbeddingProvider>> {
        let path = self.config.model_path.as_deref()?;
        match OnnxEmbedder::load(path, self.config.dimensions) {
            Ok(embedder) => {
                info!(path, dims = self.config.dimensions, "embedding model ready");
                let cached = CachedEmbedder::new(Arc::new(embedder), self.config.cache_capacity);
                Some(Arc::new(cached))
            }
            Err(e) => {
                warn!(path, error = %e, "embedding model failed to load");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::HashedBowEmbedder;

    #[test]
    fn unconfigured_holder_is_unavailable() {
        let holder = ModelHolder::new(EmbeddingConfig::default());
        assert!(!holder.is_available());
        assert!(holder.provider().is_err());
    }

    #[test]
    fn failed_load_is_remembered() {
        let holder = ModelHolder::new(EmbeddingConfig {
            model_path: Some("/nonexistent/model.onnx".to_string()),
            ..Default::default()
        });
        assert!(holder.is_available()); // not yet probed
        assert!(holder.provider().is_err()); // probe fails
        assert!(!holder.is_available()); // failure remembered
    }

    #[test]
    fn injected_provider_is_served() {
        let holder = ModelHolder::with_provider(
            EmbeddingConfig::default(),
            Arc::new(HashedBowEmbedder::new(64)),
        );
        assert!(holder.is_available());
        let provider = holder.provider().unwrap();
        assert_eq!(provider.dimensions(), 64);
    }
}
