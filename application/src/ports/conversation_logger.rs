//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording debate events
//! (start, turns, digests, verdict) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! debate in a machine-readable format (JSONL).

use debate_domain::{DebatePhase, Digest, Turn, Verdict};
use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "turn", "summary", "verdict").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn debate_started(seed_prompt: &str, total_turns: usize) -> Self {
        Self::new(
            "debate_started",
            json!({ "seed_prompt": seed_prompt, "turns": total_turns }),
        )
    }

    pub fn turn(turn: &Turn) -> Self {
        Self::new(
            "turn",
            json!({
                "index": turn.index,
                "speaker": turn.speaker.display_name(),
                "success": turn.success,
                "text": turn.text,
            }),
        )
    }

    pub fn summary(digest: &Digest) -> Self {
        Self::new(
            "summary",
            json!({
                "index": digest.index,
                "start": digest.start,
                "end": digest.end,
                "success": digest.success,
                "text": digest.text,
            }),
        )
    }

    pub fn debate_finished(phase: DebatePhase, turns: usize, summaries: usize) -> Self {
        Self::new(
            "debate_finished",
            json!({ "phase": phase.as_str(), "turns": turns, "summaries": summaries }),
        )
    }

    pub fn verdict(verdict: &Verdict) -> Self {
        Self::new(
            "verdict",
            json!({
                "model": verdict.model,
                "success": verdict.success,
                "winner": verdict.declared_winner().map(|p| p.display_name()),
                "text": verdict.text,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; implementations drop events they
/// cannot write.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
