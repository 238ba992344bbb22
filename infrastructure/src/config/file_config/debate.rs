//! Turn loop settings from TOML (`[debate]` section)

use super::super::ConfigValidationError;
use debate_application::{DEFAULT_SEED_PROMPT, ExecutionParams, FailurePolicy};
use serde::{Deserialize, Serialize};

/// Turn loop settings from TOML
///
/// # Example
///
/// ```toml
/// [debate]
/// turns = 20
/// context_window = 5
/// summary_interval = 10
/// failure_policy = "halt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub turns: usize,
    pub context_window: usize,
    pub summary_interval: usize,
    pub seed_prompt: String,
    pub failure_policy: FailurePolicy,
    pub persona_max_tokens: u32,
    pub summary_max_tokens: u32,
    pub judge_max_tokens: u32,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            turns: params.turns,
            context_window: params.context_window,
            summary_interval: params.summary_interval,
            seed_prompt: DEFAULT_SEED_PROMPT.to_string(),
            failure_policy: params.failure_policy,
            persona_max_tokens: params.persona_max_tokens,
            summary_max_tokens: params.summary_max_tokens,
            judge_max_tokens: params.judge_max_tokens,
        }
    }
}

impl FileDebateConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let counts = [
            ("debate.turns", self.turns),
            ("debate.summary_interval", self.summary_interval),
            ("debate.persona_max_tokens", self.persona_max_tokens as usize),
            ("debate.summary_max_tokens", self.summary_max_tokens as usize),
            ("debate.judge_max_tokens", self.judge_max_tokens as usize),
        ];
        for (field, value) in counts {
            if value == 0 {
                issues.push(ConfigValidationError::NotPositive { field });
            }
        }
        if self.seed_prompt.trim().is_empty() {
            issues.push(ConfigValidationError::EmptySeedPrompt);
        }
        issues
    }

    /// Execution parameters with default pacing
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams {
            turns: self.turns,
            context_window: self.context_window,
            summary_interval: self.summary_interval,
            seed_prompt: self.seed_prompt.clone(),
            failure_policy: self.failure_policy,
            persona_max_tokens: self.persona_max_tokens,
            summary_max_tokens: self.summary_max_tokens,
            judge_max_tokens: self.judge_max_tokens,
            ..ExecutionParams::default()
        }
    }
}
