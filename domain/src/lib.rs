//! Domain layer for titans-debate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Persona**: a fixed debating identity bound to a model backend
//! - **Transcript**: strictly alternating turns, starting with the first persona
//! - **Summary log**: one digest per `summary_interval` turns
//! - **Verdict**: the judge's analysis of the whole summary log
//! - **Debate session**: the per-session store holding all of the above

pub mod config;
pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model};
pub use debate::{
    session::{DebatePhase, DebateSession},
    summary::{Digest, SummaryLog},
    transcript::{Transcript, Turn, context_window, render_lines},
    verdict::Verdict,
};
pub use persona::{
    entities::{Persona, PersonaId},
    roster::PersonaRoster,
};
pub use prompt::PromptTemplate;
pub use providers::{EndpointConfig, ProviderConfig, ProviderKind};
