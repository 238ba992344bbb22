//! Application layer for titans-debate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{
    DEFAULT_SEED_PROMPT, DebateConfig, DebateModels, ExecutionParams, FailurePolicy,
    PacingStrategy,
};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{DebateProgressNotifier, NoProgress},
};
pub use use_cases::engine::DebateEngine;
pub use use_cases::judge_debate::JudgeDebateUseCase;
pub use use_cases::persona_responder::{PersonaResponder, Responder};
pub use use_cases::run_debate::{RunDebateError, RunDebateOutput, RunDebateUseCase};
pub use use_cases::summarize::Summarizer;
