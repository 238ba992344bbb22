//! Model backend adapters.
//!
//! Each backend family speaks the OpenAI chat-completions dialect, so a
//! single [`OpenAiCompatibleAdapter`] is instantiated once per family and
//! the [`RoutingGateway`] picks one per request.

pub mod openai_compatible;
pub mod routing;

pub use openai_compatible::OpenAiCompatibleAdapter;
pub use routing::RoutingGateway;

use async_trait::async_trait;
use debate_application::ports::llm_gateway::{CompletionRequest, GatewayError};
use debate_domain::{Model, ProviderKind};

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn complete(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError>;
}
