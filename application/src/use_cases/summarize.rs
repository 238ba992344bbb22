//! Summarizer
//!
//! Condenses one block of the transcript into a short, balanced digest.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use debate_domain::{Digest, Model, PersonaRoster, PromptTemplate, Turn, render_lines};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Summarizer<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    roster: PersonaRoster,
    max_tokens: u32,
}

impl<G: LlmGateway + 'static> Summarizer<G> {
    pub fn new(gateway: Arc<G>, model: Model, roster: PersonaRoster, max_tokens: u32) -> Self {
        Self {
            gateway,
            model,
            roster,
            max_tokens,
        }
    }

    pub fn build_request(&self, entries: &[Turn]) -> CompletionRequest {
        CompletionRequest::new(
            PromptTemplate::summary_system(),
            PromptTemplate::summary_prompt(&self.roster, &render_lines(entries)),
            self.max_tokens,
        )
    }

    /// Summarize `entries`, returning the trimmed digest text.
    pub async fn summarize(&self, entries: &[Turn]) -> Result<String, GatewayError> {
        let request = self.build_request(entries);
        let text = self.gateway.complete(&self.model, &request).await?;
        Ok(text.trim().to_string())
    }

    /// Summarize the block `[start, end)` into a [`Digest`], recording failures.
    pub async fn digest(&self, start: usize, end: usize, entries: &[Turn]) -> Digest {
        debug!("Summarizing turns {}..{} with {}", start, end, self.model);
        match self.summarize(entries).await {
            Ok(text) => Digest::success(start, end, text),
            Err(e) => {
                warn!("Summary of turns {}..{} failed: {}", start, end, e);
                Digest::failure(start, end, e)
            }
        }
    }
}
