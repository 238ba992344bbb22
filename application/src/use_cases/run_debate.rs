//! Run Debate use case
//!
//! The turn scheduler. Drives a fixed number of strictly alternating turns,
//! feeds each persona its opponent's latest utterance plus a sliding window
//! of recent context, and hands every completed block of turns to the
//! summarizer.

use crate::config::{DebateConfig, ExecutionParams, FailurePolicy};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::persona_responder::{PersonaResponder, Responder};
use crate::use_cases::shared::{Pacer, cancellable, is_cancelled};
use crate::use_cases::summarize::Summarizer;
use debate_domain::{DebatePhase, DebateSession, DomainError, PersonaRoster, Turn};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that stop a debate run early
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Debate cancelled after {turns} turns")]
    Cancelled { turns: usize },

    #[error("Backend failure during {stage}: {message}")]
    Backend { stage: String, message: String },
}

impl RunDebateError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunDebateError::Cancelled { .. })
    }
}

/// Tallies of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDebateOutput {
    pub phase: DebatePhase,
    pub turns: usize,
    pub summaries: usize,
    pub failed_turns: usize,
    pub failed_summaries: usize,
}

impl RunDebateOutput {
    fn from_session(session: &DebateSession) -> Self {
        let transcript = session.transcript().entries();
        let summaries = session.summaries().entries();
        Self {
            phase: session.phase(),
            turns: transcript.len(),
            summaries: summaries.len(),
            failed_turns: transcript.iter().filter(|t| !t.success).count(),
            failed_summaries: summaries.iter().filter(|d| !d.success).count(),
        }
    }
}

/// Use case for running one debate into a [`DebateSession`]
pub struct RunDebateUseCase<G: LlmGateway + 'static> {
    roster: PersonaRoster,
    first: PersonaResponder<G>,
    second: PersonaResponder<G>,
    summarizer: Summarizer<G>,
    params: ExecutionParams,
    logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: LlmGateway + 'static> RunDebateUseCase<G> {
    /// Build the scheduler for `config`. The judge model doubles as summarizer.
    pub fn new(gateway: Arc<G>, config: &DebateConfig) -> Self {
        let roster = config.roster();
        let params = config.execution().clone();
        Self {
            first: PersonaResponder::new(
                Arc::clone(&gateway),
                roster.first().clone(),
                params.persona_max_tokens,
            ),
            second: PersonaResponder::new(
                Arc::clone(&gateway),
                roster.second().clone(),
                params.persona_max_tokens,
            ),
            summarizer: Summarizer::new(
                gateway,
                config.judge_model().clone(),
                roster.clone(),
                params.summary_max_tokens,
            ),
            roster,
            params,
            logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn set_cancellation(&mut self, token: Option<CancellationToken>) {
        self.cancellation_token = token;
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    fn responder_for_turn(&self, index: usize) -> &dyn Responder {
        if self.roster.speaker_for_turn(index).id == self.first.persona().id {
            &self.first
        } else {
            &self.second
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut DebateSession,
    ) -> Result<RunDebateOutput, RunDebateError> {
        self.execute_with_progress(session, &NoProgress).await
    }

    /// Reset `session` and run the full debate into it.
    ///
    /// Turns already appended stay in the session when the run stops early.
    pub async fn execute_with_progress(
        &self,
        session: &mut DebateSession,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<RunDebateOutput, RunDebateError> {
        let params = &self.params;
        let token = self.cancellation_token.as_ref();

        session.begin(&params.seed_prompt)?;
        info!(
            "Starting debate: {} turns, context window {}, summary every {} turns",
            params.turns, params.context_window, params.summary_interval
        );
        progress.on_debate_start(params.turns);
        self.logger.log(ConversationEvent::debate_started(
            &params.seed_prompt,
            params.turns,
        ));

        let mut pacer = Pacer::new(params.pacing.clone());
        let mut input = params.seed_prompt.clone();

        for index in 0..params.turns {
            if is_cancelled(token) {
                return Err(self.stop_cancelled(session, progress));
            }

            let responder = self.responder_for_turn(index);
            let persona = responder.persona();
            progress.on_turn_start(index, persona);

            let context = session.transcript().window(params.context_window);
            let Some(result) = cancellable(token, responder.respond(&input, context)).await
            else {
                return Err(self.stop_cancelled(session, progress));
            };

            let turn = match result {
                Ok(text) => {
                    debug!(
                        "Turn {}/{}: {} responded",
                        index + 1,
                        params.turns,
                        persona.display_name()
                    );
                    Turn::success(persona.id, text)
                }
                Err(e) => {
                    warn!(
                        transient = e.is_transient(),
                        "Turn {}/{}: {} failed: {}",
                        index + 1,
                        params.turns,
                        persona.display_name(),
                        e
                    );
                    Turn::failure(persona.id, &e)
                }
            };

            let turn = session.record_turn(turn).clone();
            progress.on_turn(&turn);
            self.logger.log(ConversationEvent::turn(&turn));

            if !turn.success && params.failure_policy == FailurePolicy::Halt {
                let stage = format!("turn {}", index + 1);
                return Err(self.stop_failed(session, progress, stage, turn.text));
            }

            // The next speaker answers exactly what was just said, error text included.
            input = turn.text;

            if let Some(range) = session.summary_due(params.summary_interval) {
                let entries = session.transcript().slice(range.start, range.end);
                let Some(digest) = cancellable(
                    token,
                    self.summarizer.digest(range.start, range.end, entries),
                )
                .await
                else {
                    return Err(self.stop_cancelled(session, progress));
                };

                let digest = session.record_digest(digest).clone();
                info!(
                    "Summary {} recorded for turns {}-{}",
                    digest.index + 1,
                    digest.start + 1,
                    digest.end
                );
                progress.on_summary(&digest);
                self.logger.log(ConversationEvent::summary(&digest));

                if !digest.success && params.failure_policy == FailurePolicy::Halt {
                    let stage = format!("summary {}", digest.index + 1);
                    return Err(self.stop_failed(session, progress, stage, digest.text));
                }
            }

            if index + 1 < params.turns && !pacer.pause(token).await {
                return Err(self.stop_cancelled(session, progress));
            }
        }

        session.finish();
        let output = RunDebateOutput::from_session(session);
        info!(
            "Debate completed: {} turns ({} failed), {} summaries",
            output.turns, output.failed_turns, output.summaries
        );
        self.finish_run(session, progress);
        Ok(output)
    }

    fn stop_cancelled(
        &self,
        session: &mut DebateSession,
        progress: &dyn DebateProgressNotifier,
    ) -> RunDebateError {
        session.cancel();
        let turns = session.transcript().len();
        warn!("Debate cancelled after {} turns", turns);
        self.finish_run(session, progress);
        RunDebateError::Cancelled { turns }
    }

    fn stop_failed(
        &self,
        session: &mut DebateSession,
        progress: &dyn DebateProgressNotifier,
        stage: String,
        message: String,
    ) -> RunDebateError {
        session.fail();
        warn!("Halting debate after failed {}", stage);
        self.finish_run(session, progress);
        RunDebateError::Backend { stage, message }
    }

    fn finish_run(&self, session: &DebateSession, progress: &dyn DebateProgressNotifier) {
        progress.on_debate_complete(session.phase());
        self.logger.log(ConversationEvent::debate_finished(
            session.phase(),
            session.transcript().len(),
            session.summaries().len(),
        ));
    }
}
