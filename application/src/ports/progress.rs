//! Progress notification port
//!
//! Defines the events the presentation layer receives while a debate runs
//! and while the judge deliberates.

use debate_domain::{DebatePhase, Digest, Persona, Turn, Verdict};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called once the session has been reset and the loop is about to start
    fn on_debate_start(&self, total_turns: usize);

    /// Called before the scheduled persona is invoked
    fn on_turn_start(&self, _index: usize, _speaker: &Persona) {}

    /// Called after a turn has been appended to the transcript
    fn on_turn(&self, turn: &Turn);

    /// Called after a digest has been appended to the summary log
    fn on_summary(&self, digest: &Digest);

    /// Called when the loop stops, with the phase it ended in
    fn on_debate_complete(&self, phase: DebatePhase);

    // ==================== Judge Callbacks ====================

    fn on_judging_start(&self) {}

    fn on_verdict(&self, _verdict: &Verdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_debate_start(&self, _total_turns: usize) {}
    fn on_turn(&self, _turn: &Turn) {}
    fn on_summary(&self, _digest: &Digest) {}
    fn on_debate_complete(&self, _phase: DebatePhase) {}
}
