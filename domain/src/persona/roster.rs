//! Speaking order of the two personas

use crate::core::model::Model;
use crate::persona::entities::Persona;

/// The two debaters in speaking order (Value Object)
///
/// Turn `i` belongs to `first` when `i` is even and to `second` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaRoster {
    first: Persona,
    second: Persona,
}

impl PersonaRoster {
    /// Jobs opens, Musk replies.
    pub fn with_models(jobs: Model, musk: Model) -> Self {
        Self {
            first: Persona::jobs(jobs),
            second: Persona::musk(musk),
        }
    }

    pub fn first(&self) -> &Persona {
        &self.first
    }

    pub fn second(&self) -> &Persona {
        &self.second
    }

    /// Persona scheduled for the given zero-based turn index
    pub fn speaker_for_turn(&self, turn: usize) -> &Persona {
        if turn % 2 == 0 { &self.first } else { &self.second }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        [&self.first, &self.second].into_iter()
    }
}

impl Default for PersonaRoster {
    fn default() -> Self {
        Self::with_models(Model::default_jobs(), Model::default_musk())
    }
}
