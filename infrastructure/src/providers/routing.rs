use super::{OpenAiCompatibleAdapter, ProviderAdapter};
use crate::credentials::Credentials;
use async_trait::async_trait;
use debate_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use debate_domain::{Model, ProviderConfig, ProviderKind};
use std::sync::Arc;
use tracing::debug;

/// [`LlmGateway`] that forwards each request to the adapter serving the
/// model's backend family.
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    config: ProviderConfig,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: ProviderConfig) -> Self {
        Self { providers, config }
    }

    /// One HTTP adapter per backend family that has a credential.
    pub fn connect(config: ProviderConfig, credentials: &Credentials) -> Result<Self, GatewayError> {
        let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();
        for kind in [ProviderKind::OpenAi, ProviderKind::Groq] {
            if let Some(key) = credentials.get(kind) {
                let adapter = OpenAiCompatibleAdapter::new(kind, key, config.endpoint(kind))?;
                providers.push(Arc::new(adapter));
            }
        }
        Ok(Self::new(providers, config))
    }

    /// Routing priority:
    ///  1. explicit `[providers.routing]` entry for the model name
    ///  2. the model's own backend family
    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        let kind = self.config.route(model);
        self.providers
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                GatewayError::ModelNotAvailable(format!(
                    "{model} (no {kind} provider configured)"
                ))
            })
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn complete(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!("Routing {} to {}", model, provider.kind());
        provider.complete(model, request).await
    }
}
