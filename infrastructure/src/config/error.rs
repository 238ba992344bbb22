//! Configuration errors.

use debate_domain::ProviderKind;
use thiserror::Error;

/// Fatal startup configuration problems
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing credential for {provider}: set the {variable} environment variable")]
    MissingCredential {
        provider: ProviderKind,
        variable: String,
    },

    #[error("Invalid configuration:\n{}", list_issues(.0))]
    Invalid(Vec<ConfigValidationError>),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// A semantic problem in an otherwise well-formed config file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("models.{field}: model name cannot be empty")]
    EmptyModelName { field: &'static str },

    #[error("{field}: must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("debate.seed_prompt: must not be empty")]
    EmptySeedPrompt,

    #[error("providers.routing.{model}: unknown provider '{provider}' (expected openai or groq)")]
    UnknownProvider { model: String, provider: String },
}

fn list_issues(issues: &[ConfigValidationError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
