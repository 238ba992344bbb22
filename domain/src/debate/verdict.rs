//! Verdict value object

use crate::persona::entities::PersonaId;
use serde::{Deserialize, Serialize};

/// The judge's final analysis (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Model that produced the verdict
    pub model: String,
    pub text: String,
    pub success: bool,
}

impl Verdict {
    pub fn success(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            success: true,
        }
    }

    pub fn failure(model: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            model: model.into(),
            text: format!("Error in judging: {}", error),
            success: false,
        }
    }

    /// Best-effort extraction of the declared winner.
    ///
    /// Looks at lines mentioning "winner" (last one wins) and returns the
    /// persona named on that line. Returns `None` when both or neither are named.
    pub fn declared_winner(&self) -> Option<PersonaId> {
        if !self.success {
            return None;
        }
        self.text
            .lines()
            .rev()
            .filter(|line| line.to_lowercase().contains("winner"))
            .find_map(winner_on_line)
    }
}

fn winner_on_line(line: &str) -> Option<PersonaId> {
    let lower = line.to_lowercase();
    let jobs = lower.contains("jobs");
    let musk = lower.contains("musk");
    match (jobs, musk) {
        (true, false) => Some(PersonaId::Jobs),
        (false, true) => Some(PersonaId::Musk),
        _ => None,
    }
}
