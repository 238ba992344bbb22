//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of backend settings without depending
//! on any serialization format (TOML, JSON, etc.).

use std::collections::HashMap;

/// Backend family serving a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Groq,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Groq => "groq",
        }
    }

    /// Parse a provider name as written in configuration.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "groq" => Some(ProviderKind::Groq),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
    /// OpenAI API settings.
    pub openai: EndpointConfig,
    /// Groq API settings.
    pub groq: EndpointConfig,
}

impl ProviderConfig {
    /// Settings for a single provider.
    pub fn endpoint(&self, kind: ProviderKind) -> &EndpointConfig {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Groq => &self.groq,
        }
    }

    /// Resolve the provider for a model name, honouring explicit routing.
    pub fn route(&self, model: &crate::Model) -> ProviderKind {
        self.routing
            .get(model.as_str())
            .and_then(|name| ProviderKind::parse(name))
            .unwrap_or_else(|| model.provider())
    }
}

/// Connection settings for one OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL (the `/chat/completions` path is appended).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

impl EndpointConfig {
    pub fn openai() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_seconds: Some(120),
        }
    }

    pub fn groq() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout_seconds: Some(120),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            routing: HashMap::new(),
            openai: EndpointConfig::openai(),
            groq: EndpointConfig::groq(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;

    #[test]
    fn test_route_uses_model_family_by_default() {
        let config = ProviderConfig::default();
        assert_eq!(config.route(&Model::Gpt4oMini), ProviderKind::OpenAi);
        assert_eq!(config.route(&Model::Mixtral8x7b), ProviderKind::Groq);
    }

    #[test]
    fn test_route_honours_explicit_override() {
        let mut config = ProviderConfig::default();
        config
            .routing
            .insert("my-finetune".to_string(), "OpenAI".to_string());
        assert_eq!(config.route(&Model::from("my-finetune")), ProviderKind::OpenAi);
    }

    #[test]
    fn test_unknown_routing_target_falls_back() {
        let mut config = ProviderConfig::default();
        config
            .routing
            .insert("gpt-4o".to_string(), "bedrock".to_string());
        assert_eq!(config.route(&Model::Gpt4o), ProviderKind::OpenAi);
    }
}
