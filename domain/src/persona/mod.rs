//! Debating personas.
//!
//! Personas are data, not control flow: each [`Persona`] record carries its
//! identity, debate characteristics, rules and the model it is bound to.
//! A [`PersonaRoster`] fixes the speaking order.

pub mod entities;
pub mod roster;
