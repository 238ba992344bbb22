//! Debate configuration container.
//!
//! [`DebateConfig`] groups model bindings and execution parameters into the
//! single value the [`DebateEngine`](crate::use_cases::engine::DebateEngine)
//! is built from. Use cases receive only the slices they need.

use crate::config::ExecutionParams;
use debate_domain::{Model, PersonaRoster};

/// Model bindings for the two personas and the judge.
///
/// The judge model also produces the periodic digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateModels {
    pub jobs: Model,
    pub musk: Model,
    pub judge: Model,
}

impl Default for DebateModels {
    fn default() -> Self {
        Self {
            jobs: Model::default_jobs(),
            musk: Model::default_musk(),
            judge: Model::default_judge(),
        }
    }
}

impl DebateModels {
    /// Every distinct model the debate will call
    pub fn all(&self) -> Vec<&Model> {
        let mut models = vec![&self.jobs];
        for model in [&self.musk, &self.judge] {
            if !models.contains(&model) {
                models.push(model);
            }
        }
        models
    }
}

/// Configuration container for a debate session.
#[derive(Debug, Clone, Default)]
pub struct DebateConfig {
    models: DebateModels,
    execution: ExecutionParams,
}

impl DebateConfig {
    pub fn new(models: DebateModels, execution: ExecutionParams) -> Self {
        Self { models, execution }
    }

    // ==================== Accessors ====================

    pub fn models(&self) -> &DebateModels {
        &self.models
    }

    pub fn execution(&self) -> &ExecutionParams {
        &self.execution
    }

    pub fn execution_mut(&mut self) -> &mut ExecutionParams {
        &mut self.execution
    }

    /// Personas in speaking order, bound to the configured models
    pub fn roster(&self) -> PersonaRoster {
        PersonaRoster::with_models(self.models.jobs.clone(), self.models.musk.clone())
    }

    pub fn judge_model(&self) -> &Model {
        &self.models.judge
    }
}
