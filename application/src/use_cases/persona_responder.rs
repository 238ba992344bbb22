//! Persona responder
//!
//! Wraps a model backend with persona-locked instructions. Both personas are
//! the same type; they differ only in the [`Persona`] record they carry.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use debate_domain::{Persona, PromptTemplate, Turn, render_lines};
use std::sync::Arc;
use tracing::debug;

/// The single capability a debater exposes
#[async_trait]
pub trait Responder: Send + Sync {
    fn persona(&self) -> &Persona;

    /// Reply to the opponent's latest utterance given the recent context.
    /// Returns the utterance trimmed of surrounding whitespace.
    async fn respond(&self, opponent_text: &str, context: &[Turn]) -> Result<String, GatewayError>;
}

/// [`Responder`] backed by an [`LlmGateway`]
pub struct PersonaResponder<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    persona: Persona,
    max_tokens: u32,
}

impl<G: LlmGateway + 'static> PersonaResponder<G> {
    pub fn new(gateway: Arc<G>, persona: Persona, max_tokens: u32) -> Self {
        Self {
            gateway,
            persona,
            max_tokens,
        }
    }

    /// The request this responder would issue
    pub fn build_request(&self, opponent_text: &str, context: &[Turn]) -> CompletionRequest {
        CompletionRequest::new(
            PromptTemplate::persona_system(&self.persona, self.max_tokens),
            PromptTemplate::persona_turn(&self.persona, &render_lines(context), opponent_text),
            self.max_tokens,
        )
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> Responder for PersonaResponder<G> {
    fn persona(&self) -> &Persona {
        &self.persona
    }

    async fn respond(&self, opponent_text: &str, context: &[Turn]) -> Result<String, GatewayError> {
        let request = self.build_request(opponent_text, context);
        debug!(
            "{} responding via {} ({} context turns)",
            self.persona.display_name(),
            self.persona.model,
            context.len()
        );
        let text = self.gateway.complete(&self.persona.model, &request).await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;
    use debate_domain::{Model, PersonaId};

    #[tokio::test]
    async fn test_response_is_trimmed() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_text(&Model::Gpt4oMini, "  Think different.\n");
        let responder = PersonaResponder::new(gateway, Persona::jobs(Model::Gpt4oMini), 100);

        let text = responder.respond("Mars!", &[]).await.unwrap();
        assert_eq!(text, "Think different.");
    }

    #[tokio::test]
    async fn test_request_carries_persona_and_context() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_text(&Model::Mixtral8x7b, "ok");
        let responder =
            PersonaResponder::new(Arc::clone(&gateway), Persona::musk(Model::Mixtral8x7b), 100);

        let mut context = vec![Turn::success(PersonaId::Jobs, "iPhone changed everything")];
        context[0].index = 0;
        responder.respond("iPhone changed everything", &context).await.unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        let (model, request) = &requests[0];
        assert_eq!(*model, Model::Mixtral8x7b);
        assert!(request.instructions.contains("You are Elon Musk"));
        assert!(request.user_content.contains("Steve Jobs: iPhone changed everything"));
        assert_eq!(request.max_response_units, 100);
    }

    #[tokio::test]
    async fn test_backend_error_propagates_to_caller() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_error(&Model::Gpt4oMini, GatewayError::Timeout);
        let responder = PersonaResponder::new(gateway, Persona::jobs(Model::Gpt4oMini), 100);

        let err = responder.respond("X", &[]).await.unwrap_err();
        assert_eq!(err, GatewayError::Timeout);
    }
}
