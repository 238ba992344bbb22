//! Scripted gateway shared by use case tests.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use debate_domain::Model;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Mock gateway returning scripted responses per model, in order.
///
/// When a model's queue is empty it answers `"{model} #{n}"`, where `n`
/// counts that model's calls starting at 1.
pub(crate) struct ScriptedGateway {
    queues: Mutex<HashMap<String, VecDeque<Result<String, GatewayError>>>>,
    calls: Mutex<HashMap<String, usize>>,
    requests: Mutex<Vec<(Model, CompletionRequest)>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, model: &Model, response: Result<String, GatewayError>) {
        self.queues
            .lock()
            .unwrap()
            .entry(model.to_string())
            .or_default()
            .push_back(response);
    }

    pub(crate) fn push_text(&self, model: &Model, text: &str) {
        self.push(model, Ok(text.to_string()));
    }

    pub(crate) fn push_error(&self, model: &Model, error: GatewayError) {
        self.push(model, Err(error));
    }

    /// Every request received, in order
    pub(crate) fn requests(&self) -> Vec<(Model, CompletionRequest)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn requests_for(&self, model: &Model) -> Vec<CompletionRequest> {
        self.requests()
            .into_iter()
            .filter(|(m, _)| m == model)
            .map(|(_, r)| r)
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GatewayError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.clone(), request.clone()));

        let n = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(model.to_string()).or_default();
            *count += 1;
            *count
        };

        let scripted = self
            .queues
            .lock()
            .unwrap()
            .get_mut(model.as_str())
            .and_then(|q| q.pop_front());
        scripted.unwrap_or_else(|| Ok(format!("{} #{}", model, n)))
    }
}
