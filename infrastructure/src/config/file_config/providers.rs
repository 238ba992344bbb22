//! Provider configuration from TOML (`[providers]` section)

use super::super::ConfigValidationError;
use debate_domain::{EndpointConfig, ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Overrides for one OpenAI-compatible endpoint. Unset fields keep the
/// backend family's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Environment variable name for the API key.
    pub api_key_env: Option<String>,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

impl FileEndpointConfig {
    fn resolve(&self, defaults: EndpointConfig) -> EndpointConfig {
        EndpointConfig {
            api_key_env: self.api_key_env.clone().unwrap_or(defaults.api_key_env),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout_seconds: self.timeout_seconds.or(defaults.timeout_seconds),
        }
    }
}

/// Provider settings from TOML
///
/// # Example
///
/// ```toml
/// [providers.groq]
/// api_key_env = "MY_GROQ_KEY"
///
/// [providers.routing]
/// "my-finetune" = "openai"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileEndpointConfig,
    pub groq: FileEndpointConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl FileProvidersConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues: Vec<_> = self
            .routing
            .iter()
            .filter(|(_, provider)| ProviderKind::parse(provider).is_none())
            .map(|(model, provider)| ConfigValidationError::UnknownProvider {
                model: model.clone(),
                provider: provider.clone(),
            })
            .collect();
        issues.sort_by_key(|issue| issue.to_string());
        issues
    }

    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            routing: self.routing.clone(),
            openai: self.openai.resolve(EndpointConfig::openai()),
            groq: self.groq.resolve(EndpointConfig::groq()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_groq_section_keeps_groq_url() {
        let toml_str = r#"
[providers.groq]
api_key_env = "MY_GROQ_KEY"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let providers = config.providers.to_provider_config();
        assert_eq!(providers.groq.api_key_env, "MY_GROQ_KEY");
        assert_eq!(providers.groq.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(providers.openai, EndpointConfig::openai());
    }

    #[test]
    fn test_unknown_routing_target_is_reported() {
        let mut config = FileProvidersConfig::default();
        config
            .routing
            .insert("gpt-4o".to_string(), "bedrock".to_string());
        assert_eq!(config.validate().len(), 1);
    }
}
