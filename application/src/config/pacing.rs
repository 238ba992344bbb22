//! Inter-turn pacing strategies.
//!
//! Pacing keeps the turn loop under backend rate limits. The token bucket
//! is a pure function of the clock so it can be tested without sleeping.

use std::time::{Duration, Instant};

/// How long the scheduler waits between turns
#[derive(Debug, Clone, PartialEq)]
pub enum PacingStrategy {
    /// No waiting
    None,
    /// Fixed delay after every turn
    Fixed(Duration),
    /// Allow bursts of `capacity` turns, refilling at `refill_per_second`
    TokenBucket { capacity: u32, refill_per_second: f64 },
}

impl Default for PacingStrategy {
    fn default() -> Self {
        PacingStrategy::Fixed(Duration::from_millis(500))
    }
}

/// Token bucket rate limiter
#[derive(Debug, Clone)]
pub struct TokenBucket {
    capacity: f64,
    tokens: f64,
    refill_per_second: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// A full bucket. `capacity` is clamped to at least 1 and the refill
    /// rate to a small positive value.
    pub fn new(capacity: u32, refill_per_second: f64, now: Instant) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            capacity,
            tokens: capacity,
            refill_per_second: refill_per_second.max(f64::EPSILON),
            last_refill: now,
        }
    }

    /// Take one token at `now` and return how long the caller must wait
    /// before acting. Tokens may go negative; the debt is repaid by refill.
    pub fn reserve(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.refill_per_second).min(self.capacity);
        self.last_refill = now;

        self.tokens -= 1.0;
        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(-self.tokens / self.refill_per_second)
        }
    }

    /// Tokens currently available (may be negative while in debt)
    pub fn available(&self) -> f64 {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_half_second() {
        assert_eq!(
            PacingStrategy::default(),
            PacingStrategy::Fixed(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_burst_then_wait() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(2, 2.0, start);

        assert_eq!(bucket.reserve(start), Duration::ZERO);
        assert_eq!(bucket.reserve(start), Duration::ZERO);
        // Empty: one token needs half a second at 2 tokens/s
        assert_eq!(bucket.reserve(start), Duration::from_millis(500));
    }

    #[test]
    fn test_refill_over_time() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(1, 1.0, start);

        assert_eq!(bucket.reserve(start), Duration::ZERO);
        let later = start + Duration::from_secs(1);
        assert_eq!(bucket.reserve(later), Duration::ZERO);
    }

    #[test]
    fn test_refill_never_exceeds_capacity() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(3, 10.0, start);
        bucket.reserve(start + Duration::from_secs(60));
        assert!((bucket.available() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(0, 4.0, start);
        assert_eq!(bucket.reserve(start), Duration::ZERO);
        assert_eq!(bucket.reserve(start), Duration::from_millis(250));
    }
}
