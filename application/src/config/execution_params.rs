//! Execution parameters: turn loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control the
//! turn loop in [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase)
//! and the request budgets of every backend call.

use crate::config::pacing::PacingStrategy;
use serde::{Deserialize, Serialize};

/// Opening prompt handed to the first speaker on turn 0.
pub const DEFAULT_SEED_PROMPT: &str = "Who has contributed more to the greater advancement of Technology in society? Each bot will try to prove its superiority.";

/// What the scheduler does when a backend call fails.
///
/// Every failure is first recorded as a visible entry (turn, digest or
/// verdict with `success == false`). The policy only decides whether the
/// turn loop continues afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the error entry and keep debating
    #[default]
    Record,
    /// Record the error entry and stop the run
    Halt,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" => Ok(FailurePolicy::Record),
            "halt" => Ok(FailurePolicy::Halt),
            other => Err(format!("unknown failure policy: {other}")),
        }
    }
}

/// Turn loop control parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionParams {
    /// Number of turns in a full run.
    pub turns: usize,
    /// Trailing transcript entries shown to a persona as context.
    pub context_window: usize,
    /// A digest is produced every `summary_interval` turns, covering exactly those turns.
    pub summary_interval: usize,
    /// Input for the first speaker on turn 0.
    pub seed_prompt: String,
    /// Whether the loop continues after a failed backend call.
    pub failure_policy: FailurePolicy,
    /// Response budget for persona turns (also used as the word limit in the prompt).
    pub persona_max_tokens: u32,
    /// Response budget for each digest.
    pub summary_max_tokens: u32,
    /// Response budget for the verdict.
    pub judge_max_tokens: u32,
    /// Inter-turn pacing.
    pub pacing: PacingStrategy,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            turns: 50,
            context_window: 5,
            summary_interval: 10,
            seed_prompt: DEFAULT_SEED_PROMPT.to_string(),
            failure_policy: FailurePolicy::Record,
            persona_max_tokens: 100,
            summary_max_tokens: 300,
            judge_max_tokens: 1024,
            pacing: PacingStrategy::default(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_context_window(mut self, k: usize) -> Self {
        self.context_window = k;
        self
    }

    pub fn with_summary_interval(mut self, interval: usize) -> Self {
        self.summary_interval = interval;
        self
    }

    pub fn with_seed_prompt(mut self, seed: impl Into<String>) -> Self {
        self.seed_prompt = seed.into();
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingStrategy) -> Self {
        self.pacing = pacing;
        self
    }

    /// Expected number of digests after a full run
    pub fn expected_summaries(&self) -> usize {
        if self.summary_interval == 0 {
            0
        } else {
            self.turns / self.summary_interval
        }
    }
}
