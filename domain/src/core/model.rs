//! Model value object representing an LLM model

use crate::providers::ProviderKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language models a persona or the judge can be bound to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // OpenAI models
    Gpt4oMini,
    Gpt4o,
    // Groq-hosted models
    Llama321bPreview,
    Llama3170bVersatile,
    Mixtral8x7b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Llama321bPreview => "llama-3.2-1b-preview",
            Model::Llama3170bVersatile => "llama-3.1-70b-versatile",
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Custom(s) => s,
        }
    }

    /// Default model for the first persona
    pub fn default_jobs() -> Model {
        Model::Gpt4oMini
    }

    /// Default model for the second persona
    pub fn default_musk() -> Model {
        Model::Llama321bPreview
    }

    /// Default model for summarization and adjudication
    pub fn default_judge() -> Model {
        Model::Mixtral8x7b
    }

    /// Check if this is an OpenAI GPT / o-series model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt4oMini | Model::Gpt4o => true,
            Model::Custom(s) => {
                s.contains("gpt")
                    || s.starts_with("o1")
                    || s.starts_with("o3")
                    || s.starts_with("o4")
            }
            _ => false,
        }
    }

    /// Backend family that serves this model
    pub fn provider(&self) -> ProviderKind {
        if self.is_gpt() {
            ProviderKind::OpenAi
        } else {
            ProviderKind::Groq
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "llama-3.2-1b-preview" => Model::Llama321bPreview,
            "llama-3.1-70b-versatile" => Model::Llama3170bVersatile,
            "mixtral-8x7b-32768" => Model::Mixtral8x7b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        let Ok(model) = s.parse::<Model>();
        model
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::default_jobs(), Model::default_musk(), Model::default_judge()] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "llama-3.3-70b-versatile".parse().unwrap();
        assert_eq!(model, Model::Custom("llama-3.3-70b-versatile".to_string()));
        assert_eq!(model.to_string(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_provider_detection() {
        assert_eq!(Model::Gpt4oMini.provider(), ProviderKind::OpenAi);
        assert_eq!(Model::Llama321bPreview.provider(), ProviderKind::Groq);
        assert_eq!(Model::Mixtral8x7b.provider(), ProviderKind::Groq);
        assert_eq!(Model::from("gpt-4.1").provider(), ProviderKind::OpenAi);
        assert_eq!(Model::from("o3-mini").provider(), ProviderKind::OpenAi);
        assert_eq!(
            Model::from("chatgpt-4o-latest").provider(),
            ProviderKind::OpenAi
        );
        assert_eq!(Model::from("gemma2-9b-it").provider(), ProviderKind::Groq);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::Mixtral8x7b).unwrap();
        assert_eq!(json, "\"mixtral-8x7b-32768\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Mixtral8x7b);
    }
}
