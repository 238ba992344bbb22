//! Per-session debate store and lifecycle
//!
//! ```text
//! Idle ──begin──▶ Running ──finish──▶ Completed
//!                    ├──cancel──▶ Cancelled
//!                    └──fail────▶ Failed
//! ```
//!
//! `begin` is accepted from any state except `Running` and always resets
//! the transcript, summaries and verdict flags first.

use crate::core::error::DomainError;
use crate::debate::summary::{Digest, SummaryLog};
use crate::debate::transcript::{Transcript, Turn};
use crate::debate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Lifecycle state of the turn scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePhase {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
    /// Stopped after a backend failure under a halting failure policy
    Failed,
}

impl DebatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebatePhase::Idle => "idle",
            DebatePhase::Running => "running",
            DebatePhase::Completed => "completed",
            DebatePhase::Cancelled => "cancelled",
            DebatePhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session-scoped debate state (Entity)
///
/// Mutated only by the turn scheduler and the judge; read by presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSession {
    phase: DebatePhase,
    seed_prompt: Option<String>,
    transcript: Transcript,
    summaries: SummaryLog,
    debate_started: bool,
    verdict_shown: bool,
    verdict: Option<Verdict>,
}

impl DebateSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        self.phase = DebatePhase::Idle;
        self.seed_prompt = None;
        self.transcript.clear();
        self.summaries.clear();
        self.debate_started = false;
        self.verdict_shown = false;
        self.verdict = None;
    }

    /// Reset and enter `Running` with the given opening prompt.
    pub fn begin(&mut self, seed_prompt: &str) -> Result<(), DomainError> {
        if self.phase == DebatePhase::Running {
            return Err(DomainError::DebateAlreadyRunning);
        }
        if seed_prompt.trim().is_empty() {
            return Err(DomainError::EmptySeedPrompt);
        }
        self.reset();
        self.phase = DebatePhase::Running;
        self.seed_prompt = Some(seed_prompt.to_string());
        self.debate_started = true;
        Ok(())
    }

    /// Append a turn to the transcript. Returns the stored turn.
    pub fn record_turn(&mut self, turn: Turn) -> &Turn {
        self.transcript.push(turn)
    }

    /// Append a digest to the summary log. Returns the stored digest.
    pub fn record_digest(&mut self, digest: Digest) -> &Digest {
        self.summaries.push(digest)
    }

    /// Transcript range that must be summarized now, if any.
    ///
    /// Due whenever the transcript length is a non-zero multiple of `interval`.
    pub fn summary_due(&self, interval: usize) -> Option<Range<usize>> {
        let len = self.transcript.len();
        if interval == 0 || len == 0 || len % interval != 0 {
            return None;
        }
        Some(len - interval..len)
    }

    pub fn finish(&mut self) {
        if self.phase == DebatePhase::Running {
            self.phase = DebatePhase::Completed;
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == DebatePhase::Running {
            self.phase = DebatePhase::Cancelled;
        }
    }

    pub fn fail(&mut self) {
        if self.phase == DebatePhase::Running {
            self.phase = DebatePhase::Failed;
        }
    }

    /// Whether a judge request may be issued now
    pub fn can_judge(&self) -> bool {
        self.debate_started && !self.verdict_shown
    }

    /// Store the verdict. Write-once: returns `false` if one is already set.
    pub fn set_verdict(&mut self, verdict: Verdict) -> bool {
        if self.verdict_shown {
            return false;
        }
        self.verdict = Some(verdict);
        self.verdict_shown = true;
        true
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> DebatePhase {
        self.phase
    }

    pub fn seed_prompt(&self) -> Option<&str> {
        self.seed_prompt.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn summaries(&self) -> &SummaryLog {
        &self.summaries
    }

    pub fn debate_started(&self) -> bool {
        self.debate_started
    }

    pub fn verdict_shown(&self) -> bool {
        self.verdict_shown
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn verdict_text(&self) -> Option<&str> {
        self.verdict.as_ref().map(|v| v.text.as_str())
    }
}
