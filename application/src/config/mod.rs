//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ExecutionParams`]: turn loop control (turns, windows, budgets, failure policy)
//! - [`PacingStrategy`]: inter-turn pacing
//! - [`DebateConfig`]: model bindings plus execution parameters

pub mod debate_config;
pub mod execution_params;
pub mod pacing;

pub use debate_config::{DebateConfig, DebateModels};
pub use execution_params::{DEFAULT_SEED_PROMPT, ExecutionParams, FailurePolicy};
pub use pacing::{PacingStrategy, TokenBucket};
