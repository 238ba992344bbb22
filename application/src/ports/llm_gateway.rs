//! LLM Gateway port
//!
//! Defines the single request/response contract every model backend honours:
//! personas, the summarizer and the judge all go through [`LlmGateway::complete`].

use async_trait::async_trait;
use debate_domain::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a backend invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Whether retrying later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_)
            | GatewayError::RateLimited(_)
            | GatewayError::Timeout => true,
            GatewayError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// One backend request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System-level instructions
    pub instructions: String,
    /// User-turn content; may be empty
    pub user_content: String,
    /// Response length budget in tokens
    pub max_response_units: u32,
}

impl CompletionRequest {
    pub fn new(
        instructions: impl Into<String>,
        user_content: impl Into<String>,
        max_response_units: u32,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            user_content: user_content.into(),
            max_response_units,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to model backends.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Issue a single completion request to `model` and return its text.
    async fn complete(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError>;
}
