//! OpenAI-compatible chat-completions adapter.
//!
//! Serves both the OpenAI and the Groq backend; they differ only in base
//! URL and credential.

use super::ProviderAdapter;
use async_trait::async_trait;
use debate_application::ports::llm_gateway::{CompletionRequest, GatewayError};
use debate_domain::{EndpointConfig, Model, ProviderKind};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct OpenAiCompatibleAdapter {
    kind: ProviderKind,
    client: Client,
    api_key: String,
    url: String,
}

impl OpenAiCompatibleAdapter {
    pub fn new(
        kind: ProviderKind,
        api_key: impl Into<String>,
        endpoint: &EndpointConfig,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(seconds) = endpoint.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            kind,
            client,
            api_key: api_key.into(),
            url: Self::completions_url(&endpoint.base_url),
        })
    }

    fn completions_url(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn translate_request(model: &Model, request: &CompletionRequest) -> ChatRequest {
        let mut messages = vec![ChatMessage {
            role: "system".to_string(),
            content: request.instructions.clone(),
        }];
        if !request.user_content.is_empty() {
            messages.push(ChatMessage {
                role: "user".to_string(),
                content: request.user_content.clone(),
            });
        }
        ChatRequest {
            model: model.to_string(),
            messages,
            max_tokens: request.max_response_units,
        }
    }

    fn map_status(status: StatusCode, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|r| r.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status.as_u16() {
            401 | 403 => GatewayError::AuthenticationFailed(message),
            404 => GatewayError::ModelNotAvailable(message),
            429 => GatewayError::RateLimited(message),
            code => GatewayError::HttpStatus {
                status: code,
                message,
            },
        }
    }

    fn normalize_response(body: &str) -> Result<String, GatewayError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| GatewayError::MalformedResponse(format!("Failed to parse response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| GatewayError::MalformedResponse("No choices in response".to_string()))
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatibleAdapter {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn complete(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        let body = Self::translate_request(model, request);
        debug!("POST {} model={} ({})", self.url, model, self.kind);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::map_status(status, &text));
        }
        Self::normalize_response(&text)
    }
}

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        assert_eq!(
            OpenAiCompatibleAdapter::completions_url("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        let adapter =
            OpenAiCompatibleAdapter::new(ProviderKind::OpenAi, "sk-test", &EndpointConfig::openai())
                .unwrap();
        assert_eq!(adapter.url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest::new("You are Steve Jobs.", "Opponent's points: X", 100);
        let body = OpenAiCompatibleAdapter::translate_request(&Model::Gpt4oMini, &request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are Steve Jobs.");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_empty_user_content_is_omitted() {
        let request = CompletionRequest::new("Summarize.", "", 300);
        let body = OpenAiCompatibleAdapter::translate_request(&Model::Mixtral8x7b, &request);
        assert_eq!(body.messages.len(), 1);
    }

    #[test]
    fn test_status_mapping() {
        let body = r#"{"error":{"message":"Invalid API key"}}"#;
        assert_eq!(
            OpenAiCompatibleAdapter::map_status(StatusCode::UNAUTHORIZED, body),
            GatewayError::AuthenticationFailed("Invalid API key".into())
        );
        assert_eq!(
            OpenAiCompatibleAdapter::map_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited("slow down".into())
        );
        assert_eq!(
            OpenAiCompatibleAdapter::map_status(StatusCode::BAD_GATEWAY, ""),
            GatewayError::HttpStatus {
                status: 502,
                message: String::new()
            }
        );
    }

    #[test]
    fn test_normalize_response() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Think different. "}}]}"#;
        assert_eq!(
            OpenAiCompatibleAdapter::normalize_response(body).unwrap(),
            "Think different."
        );

        let empty = r#"{"choices":[]}"#;
        assert!(matches!(
            OpenAiCompatibleAdapter::normalize_response(empty),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            OpenAiCompatibleAdapter::normalize_response("not json"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
