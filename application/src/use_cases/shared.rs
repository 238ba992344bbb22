//! Shared utilities for use cases.
//!
//! Cancellation helpers and the runtime side of inter-turn pacing.

use crate::config::pacing::{PacingStrategy, TokenBucket};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Whether cancellation has been requested.
pub(crate) fn is_cancelled(token: Option<&CancellationToken>) -> bool {
    token.is_some_and(|t| t.is_cancelled())
}

/// Run `future` unless `token` fires first. Returns `None` on cancellation.
pub(crate) async fn cancellable<F: Future>(
    token: Option<&CancellationToken>,
    future: F,
) -> Option<F::Output> {
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => None,
            output = future => Some(output),
        },
        None => Some(future.await),
    }
}

/// Applies a [`PacingStrategy`] between turns.
pub(crate) struct Pacer {
    strategy: PacingStrategy,
    bucket: Option<TokenBucket>,
}

impl Pacer {
    pub(crate) fn new(strategy: PacingStrategy) -> Self {
        let bucket = match &strategy {
            PacingStrategy::TokenBucket {
                capacity,
                refill_per_second,
            } => Some(TokenBucket::new(*capacity, *refill_per_second, Instant::now())),
            _ => None,
        };
        Self { strategy, bucket }
    }

    fn next_delay(&mut self) -> Duration {
        match (&self.strategy, self.bucket.as_mut()) {
            (PacingStrategy::None, _) => Duration::ZERO,
            (PacingStrategy::Fixed(delay), _) => *delay,
            (PacingStrategy::TokenBucket { .. }, Some(bucket)) => bucket.reserve(Instant::now()),
            (PacingStrategy::TokenBucket { .. }, None) => Duration::ZERO,
        }
    }

    /// Wait for the next slot. Returns `false` if cancelled while waiting.
    pub(crate) async fn pause(&mut self, token: Option<&CancellationToken>) -> bool {
        let delay = self.next_delay();
        if delay.is_zero() {
            return !is_cancelled(token);
        }
        debug!("Pacing: waiting {:?}", delay);
        cancellable(token, tokio::time::sleep(delay)).await.is_some()
    }
}
