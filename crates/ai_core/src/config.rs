//! Provider configuration
//!
//! Built once from process environment at startup and treated as immutable
//! afterwards. Credential presence decides which providers enter the attempt
//! order; the order itself is fixed (OpenAI before OpenRouter) so fallback
//! behavior is predictable within a process lifetime.

use serde::{Deserialize, Serialize};

/// Upstream completion vendors the gateway knows how to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// api.openai.com, primary
    OpenAi,
    /// api.openrouter.ai, secondary
    OpenRouter,
}

impl ProviderKind {
    /// Stable name used in responses and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenRouter => "openrouter",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one upstream provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which vendor this entry describes
    pub kind: ProviderKind,

    /// Base URL of the provider's OpenAI-compatible API
    pub base_url: String,

    /// API key; `None` excludes the provider from the attempt order
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model requested when the caller does not name one
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    30_000 // 30 seconds
}

impl ProviderConfig {
    /// Default OpenAI entry, credential unset
    pub fn openai() -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            default_model: "gpt-3.5-turbo".to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Default OpenRouter entry, credential unset
    pub fn openrouter() -> Self {
        Self {
            kind: ProviderKind::OpenRouter,
            base_url: "https://api.openrouter.ai/v1".to_string(),
            api_key: None,
            default_model: "mistral/mistral-7b-instruct".to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Whether this provider holds a credential and may be attempted
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Full completion configuration, one entry per known provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Primary provider
    pub openai: ProviderConfig,
    /// Secondary provider
    pub openrouter: ProviderConfig,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            openai: ProviderConfig::openai(),
            openrouter: ProviderConfig::openrouter(),
        }
    }
}

impl CompletionConfig {
    /// Read provider credentials and model overrides from the environment.
    ///
    /// Recognized variables: `OPENAI_API_KEY`, `OPENAI_MODEL`,
    /// `OPENROUTER_API_KEY`, `OPENROUTER_MODEL`. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut openai = ProviderConfig::openai();
        openai.api_key = non_blank("OPENAI_API_KEY");
        if let Some(model) = non_blank("OPENAI_MODEL") {
            openai.default_model = model;
        }

        let mut openrouter = ProviderConfig::openrouter();
        openrouter.api_key = non_blank("OPENROUTER_API_KEY");
        if let Some(model) = non_blank("OPENROUTER_MODEL") {
            openrouter.default_model = model;
        }

        Self { openai, openrouter }
    }

    /// Providers to attempt, in priority order.
    ///
    /// A provider without a credential is excluded entirely; it is neither
    /// attempted nor counted as a failure. The order is stable for a given
    /// configuration.
    pub fn attempt_order(&self) -> Vec<ProviderConfig> {
        [&self.openai, &self.openrouter]
            .into_iter()
            .filter(|p| p.is_configured())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_have_no_credentials() {
        let config = CompletionConfig::default();
        assert!(!config.openai.is_configured());
        assert!(!config.openrouter.is_configured());
        assert!(config.attempt_order().is_empty());
    }

    #[test]
    fn default_endpoints_and_models() {
        let openai = ProviderConfig::openai();
        assert_eq!(openai.base_url, "https://api.openai.com/v1");
        assert_eq!(openai.default_model, "gpt-3.5-turbo");
        assert_eq!(openai.timeout_ms, 30_000);

        let openrouter = ProviderConfig::openrouter();
        assert_eq!(openrouter.base_url, "https://api.openrouter.ai/v1");
        assert_eq!(openrouter.default_model, "mistral/mistral-7b-instruct");
    }

    #[test]
    fn both_keys_yield_primary_first() {
        let config = CompletionConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-a"),
            ("OPENROUTER_API_KEY", "sk-b"),
        ]));

        let order = config.attempt_order();
        assert_eq!(order.len(), 2);
        assert_eq!(order[0].kind, ProviderKind::OpenAi);
        assert_eq!(order[1].kind, ProviderKind::OpenRouter);
    }

    #[test]
    fn missing_key_excludes_provider() {
        let config =
            CompletionConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "sk-b")]));

        let order = config.attempt_order();
        assert_eq!(order.len(), 1);
        assert_eq!(order[0].kind, ProviderKind::OpenRouter);
    }

    #[test]
    fn blank_key_counts_as_unset() {
        let config = CompletionConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")]));
        assert!(config.attempt_order().is_empty());
    }

    #[test]
    fn model_overrides_apply() {
        let config = CompletionConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-a"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENROUTER_MODEL", "meta-llama/llama-3-8b-instruct"),
        ]));

        assert_eq!(config.openai.default_model, "gpt-4o-mini");
        assert_eq!(
            config.openrouter.default_model,
            "meta-llama/llama-3-8b-instruct"
        );
    }

    #[test]
    fn attempt_order_is_stable() {
        let config = CompletionConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-a"),
            ("OPENROUTER_API_KEY", "sk-b"),
        ]));

        let first: Vec<ProviderKind> =
            config.attempt_order().iter().map(|p| p.kind).collect();
        let second: Vec<ProviderKind> =
            config.attempt_order().iter().map(|p| p.kind).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn provider_kind_names() {
        assert_eq!(ProviderKind::OpenAi.name(), "openai");
        assert_eq!(ProviderKind::OpenRouter.name(), "openrouter");
        assert_eq!(format!("{}", ProviderKind::OpenAi), "openai");
    }

    #[test]
    fn config_serialization_round_trip() {
        let config = CompletionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CompletionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.openai.kind, ProviderKind::OpenAi);
        assert_eq!(back.openrouter.base_url, config.openrouter.base_url);
    }
}
