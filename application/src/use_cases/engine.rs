//! Debate engine
//!
//! Owns the [`DebateSession`] for one process session and exposes the two
//! actions the presentation layer may trigger: start a debate and judge it.
//! Everything else is read-only access to the session.

use crate::config::DebateConfig;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::judge_debate::JudgeDebateUseCase;
use crate::use_cases::run_debate::{RunDebateError, RunDebateOutput, RunDebateUseCase};
use debate_domain::{DebateSession, DomainError, Verdict};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct DebateEngine<G: LlmGateway + 'static> {
    session: DebateSession,
    run: RunDebateUseCase<G>,
    judge: JudgeDebateUseCase<G>,
}

impl<G: LlmGateway + 'static> DebateEngine<G> {
    pub fn new(gateway: Arc<G>, config: &DebateConfig) -> Self {
        let judge = JudgeDebateUseCase::new(
            Arc::clone(&gateway),
            config.judge_model().clone(),
            config.roster(),
            config.execution().judge_max_tokens,
        );
        Self {
            session: DebateSession::new(),
            run: RunDebateUseCase::new(gateway, config),
            judge,
        }
    }

    /// Route conversation events of both runs and verdicts to `logger`.
    pub fn with_logger(self, logger: Arc<dyn ConversationLogger>) -> Self {
        Self {
            session: self.session,
            run: self.run.with_logger(Arc::clone(&logger)),
            judge: self.judge.with_logger(logger),
        }
    }

    /// Run a full debate, discarding any previous one.
    pub async fn start_debate(&mut self) -> Result<RunDebateOutput, RunDebateError> {
        self.start_debate_with(&NoProgress, None).await
    }

    pub async fn start_debate_with(
        &mut self,
        progress: &dyn DebateProgressNotifier,
        cancel: Option<CancellationToken>,
    ) -> Result<RunDebateOutput, RunDebateError> {
        self.run.set_cancellation(cancel);
        self.run
            .execute_with_progress(&mut self.session, progress)
            .await
    }

    /// Judge the current debate. `Ok(None)` if a verdict was already shown.
    pub async fn judge_debate(&mut self) -> Result<Option<Verdict>, DomainError> {
        self.judge_debate_with(&NoProgress, None).await
    }

    pub async fn judge_debate_with(
        &mut self,
        progress: &dyn DebateProgressNotifier,
        cancel: Option<CancellationToken>,
    ) -> Result<Option<Verdict>, DomainError> {
        self.judge.set_cancellation(cancel);
        self.judge
            .execute_with_progress(&mut self.session, progress)
            .await
    }

    pub fn session(&self) -> &DebateSession {
        &self.session
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DebateModels, ExecutionParams, PacingStrategy};
    use crate::use_cases::test_support::ScriptedGateway;
    use debate_domain::{DebatePhase, Model, PersonaId};

    fn engine(gateway: &Arc<ScriptedGateway>, turns: usize) -> DebateEngine<ScriptedGateway> {
        let config = DebateConfig::new(
            DebateModels::default(),
            ExecutionParams::default()
                .with_turns(turns)
                .with_pacing(PacingStrategy::None),
        );
        DebateEngine::new(Arc::clone(gateway), &config)
    }

    #[tokio::test]
    async fn test_judge_before_start_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut engine = engine(&gateway, 4);

        assert_eq!(
            engine.judge_debate().await,
            Err(DomainError::DebateNotStarted)
        );
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_full_session_flow() {
        let gateway = Arc::new(ScriptedGateway::new());
        let judge = Model::default_judge();
        let mut engine = engine(&gateway, 20);

        let output = engine.start_debate().await.unwrap();
        assert_eq!(output.phase, DebatePhase::Completed);
        assert_eq!(engine.session().summaries().len(), 2);
        assert!(engine.session().debate_started());
        assert!(!engine.session().verdict_shown());

        gateway.push_text(&judge, "Analysis...\nWinner: Elon Musk");
        let verdict = engine.judge_debate().await.unwrap().unwrap();
        assert_eq!(verdict.declared_winner(), Some(PersonaId::Musk));
        assert!(engine.session().verdict_shown());

        // Two summaries plus one verdict; a second judge call is a no-op
        assert!(engine.judge_debate().await.unwrap().is_none());
        assert_eq!(gateway.requests_for(&judge).len(), 3);
    }

    #[tokio::test]
    async fn test_restart_clears_previous_debate() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut engine = engine(&gateway, 10);

        engine.start_debate().await.unwrap();
        engine.judge_debate().await.unwrap();
        assert!(engine.session().verdict().is_some());

        engine.start_debate().await.unwrap();
        assert!(!engine.session().verdict_shown());
        assert!(engine.session().verdict().is_none());
        assert_eq!(engine.session().transcript().len(), 10);
        assert_eq!(engine.session().summaries().len(), 1);
    }

    #[tokio::test]
    async fn test_interrupted_judging_can_be_retried() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut engine = engine(&gateway, 2);
        engine.start_debate().await.unwrap();

        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(
            engine.judge_debate_with(&NoProgress, Some(token)).await,
            Err(DomainError::Cancelled)
        );
        assert!(engine.session().verdict().is_none());

        assert!(engine.judge_debate().await.unwrap().is_some());
        assert!(engine.session().verdict_shown());
    }

    #[tokio::test]
    async fn test_reset_returns_to_defaults() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut engine = engine(&gateway, 2);

        engine.start_debate().await.unwrap();
        engine.reset();
        assert_eq!(*engine.session(), DebateSession::default());
    }
}
