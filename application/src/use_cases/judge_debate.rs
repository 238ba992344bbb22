//! Judge Debate use case
//!
//! Reads the full summary log and produces the final verdict. Backend
//! failures become a failed [`Verdict`] rather than an error; only
//! cancellation leaves the session unjudged.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::shared::cancellable;
use debate_domain::{
    DebateSession, DomainError, Model, PersonaRoster, PromptTemplate, SummaryLog, Verdict,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Use case for adjudicating a debate
pub struct JudgeDebateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    roster: PersonaRoster,
    max_tokens: u32,
    logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: LlmGateway + 'static> JudgeDebateUseCase<G> {
    pub fn new(gateway: Arc<G>, model: Model, roster: PersonaRoster, max_tokens: u32) -> Self {
        Self {
            gateway,
            model,
            roster,
            max_tokens,
            logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn set_cancellation(&mut self, token: Option<CancellationToken>) {
        self.cancellation_token = token;
    }

    pub fn build_request(&self, summaries: &SummaryLog) -> CompletionRequest {
        CompletionRequest::new(
            PromptTemplate::judge_system(),
            PromptTemplate::judge_prompt(&self.roster, &summaries.joined()),
            self.max_tokens,
        )
    }

    /// Issue one judge request for `summaries`. Never fails; an empty log
    /// still produces a request.
    pub async fn judge(&self, summaries: &SummaryLog) -> Verdict {
        let request = self.build_request(summaries);
        match self.gateway.complete(&self.model, &request).await {
            Ok(text) => Verdict::success(self.model.to_string(), text.trim()),
            Err(e) => {
                warn!("Judge {} failed: {}", self.model, e);
                Verdict::failure(self.model.to_string(), e)
            }
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut DebateSession,
    ) -> Result<Option<Verdict>, DomainError> {
        self.execute_with_progress(session, &NoProgress).await
    }

    /// Judge the session's debate and store the verdict.
    ///
    /// Returns `Ok(None)` without contacting the backend when a verdict is
    /// already shown for this debate, and `Err(Cancelled)` with no verdict
    /// stored when the token fires first.
    pub async fn execute_with_progress(
        &self,
        session: &mut DebateSession,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Option<Verdict>, DomainError> {
        if !session.debate_started() {
            return Err(DomainError::DebateNotStarted);
        }
        if session.verdict_shown() {
            info!("Verdict already shown; not judging again");
            return Ok(None);
        }

        info!(
            "Judging debate from {} summaries with {}",
            session.summaries().len(),
            self.model
        );
        progress.on_judging_start();

        let token = self.cancellation_token.as_ref();
        let Some(verdict) = cancellable(token, self.judge(session.summaries())).await else {
            warn!("Judging cancelled; no verdict recorded");
            return Err(DomainError::Cancelled);
        };
        session.set_verdict(verdict.clone());

        self.logger.log(ConversationEvent::verdict(&verdict));
        progress.on_verdict(&verdict);
        Ok(Some(verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::ScriptedGateway;
    use debate_domain::Digest;

    fn use_case(gateway: &Arc<ScriptedGateway>) -> JudgeDebateUseCase<ScriptedGateway> {
        JudgeDebateUseCase::new(
            Arc::clone(gateway),
            Model::Mixtral8x7b,
            PersonaRoster::default(),
            1024,
        )
    }

    #[tokio::test]
    async fn test_empty_summary_log_still_issues_request() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_text(&Model::Mixtral8x7b, "Winner: Steve Jobs");

        let verdict = use_case(&gateway).judge(&SummaryLog::new()).await;
        assert!(verdict.success);
        assert_eq!(verdict.text, "Winner: Steve Jobs");

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].1.user_content.contains("Debate Summaries:\n\n"));
    }

    #[tokio::test]
    async fn test_backend_error_becomes_verdict_text() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_error(
            &Model::Mixtral8x7b,
            GatewayError::AuthenticationFailed("invalid key".into()),
        );

        let mut session = DebateSession::new();
        session.begin("X").unwrap();
        let verdict = use_case(&gateway)
            .execute(&mut session)
            .await
            .unwrap()
            .unwrap();

        assert!(!verdict.success);
        assert_eq!(
            session.verdict_text(),
            Some("Error in judging: Authentication failed: invalid key")
        );
        assert!(session.verdict_shown());
    }

    #[tokio::test]
    async fn test_requires_started_debate() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut session = DebateSession::new();

        let result = use_case(&gateway).execute(&mut session).await;
        assert_eq!(result, Err(DomainError::DebateNotStarted));
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_judging_leaves_session_unjudged() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut judge = use_case(&gateway);
        let token = CancellationToken::new();
        token.cancel();
        judge.set_cancellation(Some(token));

        let mut session = DebateSession::new();
        session.begin("X").unwrap();
        session.finish();

        assert_eq!(
            judge.execute(&mut session).await,
            Err(DomainError::Cancelled)
        );
        assert!(!session.verdict_shown());
        assert!(session.can_judge());
        assert!(gateway.requests().is_empty());

        judge.set_cancellation(None);
        assert!(judge.execute(&mut session).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_second_call_does_not_hit_backend() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_text(&Model::Mixtral8x7b, "Winner: Elon Musk");
        let judge = use_case(&gateway);

        let mut session = DebateSession::new();
        session.begin("X").unwrap();
        session.record_digest(Digest::success(0, 10, "S1"));
        session.finish();

        assert!(judge.execute(&mut session).await.unwrap().is_some());
        assert!(judge.execute(&mut session).await.unwrap().is_none());
        assert_eq!(gateway.requests().len(), 1);
        assert_eq!(session.verdict_text(), Some("Winner: Elon Musk"));
        assert!(gateway.requests()[0].1.user_content.contains("S1"));
    }
}
