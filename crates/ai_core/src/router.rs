//! Provider router with ordered fallback
//!
//! Providers are attempted strictly sequentially in priority order. The
//! first success wins and later providers are never invoked; a failure is
//! absorbed and logged unless it came from the last provider in the chain.

use std::{fmt, sync::Arc};

use tracing::{debug, instrument, warn};

use crate::{
    client::ChatCompletionsClient,
    config::CompletionConfig,
    error::CompletionError,
    extract::extract,
    ports::{Completion, CompletionProvider, CompletionRequest},
};

/// Routes completion requests across the configured fallback chain
pub struct CompletionRouter {
    providers: Vec<Arc<dyn CompletionProvider>>,
}

impl fmt::Debug for CompletionRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRouter")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl CompletionRouter {
    /// Create a router over an explicit provider chain
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self { providers }
    }

    /// Build the router from resolved configuration.
    ///
    /// Providers without a credential are already excluded by
    /// [`CompletionConfig::attempt_order`]; an empty chain is legal here and
    /// reported on the first call instead.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let mut providers: Vec<Arc<dyn CompletionProvider>> = Vec::new();
        for provider_config in config.attempt_order() {
            providers.push(Arc::new(ChatCompletionsClient::new(provider_config)?));
        }
        Ok(Self::new(providers))
    }

    /// Names of the providers in attempt order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run the fallback chain for one request.
    ///
    /// # Errors
    ///
    /// [`CompletionError::NoProviderConfigured`] when the chain is empty
    /// (zero network calls), or [`CompletionError::Exhausted`] when every
    /// provider failed, carrying the last provider's error detail.
    #[instrument(skip(self, request), fields(chain_len = self.providers.len()))]
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, CompletionError> {
        let last_index = self.providers.len().saturating_sub(1);

        for (index, provider) in self.providers.iter().enumerate() {
            match provider.complete(request).await {
                Ok(raw) => {
                    let extracted = extract(&raw);
                    if extracted.is_missing() {
                        // Successful call, unrecognized shape: distinct from
                        // a transport failure, so log it separately.
                        warn!(
                            provider = provider.name(),
                            "Upstream replied without a recognizable text field"
                        );
                    }
                    debug!(provider = provider.name(), "Completion succeeded");
                    return Ok(Completion {
                        provider: provider.name().to_string(),
                        text: extracted.into_text(),
                        raw,
                    });
                },
                Err(err) if index < last_index => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "Provider call failed, advancing to next"
                    );
                },
                Err(err) => {
                    return Err(CompletionError::Exhausted {
                        provider: provider.name().to_string(),
                        detail: err.to_string(),
                    });
                },
            }
        }

        Err(CompletionError::NoProviderConfigured)
    }
}
