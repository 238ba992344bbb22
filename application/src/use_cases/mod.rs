//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod engine;
pub mod judge_debate;
pub mod persona_responder;
pub mod run_debate;
pub(crate) mod shared;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
