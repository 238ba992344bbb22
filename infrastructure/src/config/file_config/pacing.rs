//! Inter-turn pacing from TOML (`[pacing]` section)

use super::super::ConfigValidationError;
use debate_application::PacingStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePacingKind {
    None,
    #[default]
    Fixed,
    TokenBucket,
}

/// Pacing settings from TOML
///
/// # Example
///
/// ```toml
/// [pacing]
/// strategy = "token_bucket"
/// capacity = 3
/// refill_per_second = 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePacingConfig {
    pub strategy: FilePacingKind,
    /// Delay for the `fixed` strategy
    pub delay_ms: u64,
    /// Burst size for the `token_bucket` strategy
    pub capacity: u32,
    pub refill_per_second: f64,
}

impl Default for FilePacingConfig {
    fn default() -> Self {
        Self {
            strategy: FilePacingKind::Fixed,
            delay_ms: 500,
            capacity: 1,
            refill_per_second: 2.0,
        }
    }
}

impl FilePacingConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.strategy == FilePacingKind::TokenBucket {
            if self.capacity == 0 {
                issues.push(ConfigValidationError::NotPositive {
                    field: "pacing.capacity",
                });
            }
            if self.refill_per_second.is_nan() || self.refill_per_second <= 0.0 {
                issues.push(ConfigValidationError::NotPositive {
                    field: "pacing.refill_per_second",
                });
            }
        }
        issues
    }

    pub fn to_strategy(&self) -> PacingStrategy {
        match self.strategy {
            FilePacingKind::None => PacingStrategy::None,
            FilePacingKind::Fixed => PacingStrategy::Fixed(Duration::from_millis(self.delay_ms)),
            FilePacingKind::TokenBucket => PacingStrategy::TokenBucket {
                capacity: self.capacity,
                refill_per_second: self.refill_per_second,
            },
        }
    }
}
