//! Persona entities

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Identifier of one of the two fixed debaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaId {
    Jobs,
    Musk,
}

impl PersonaId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Jobs => "jobs",
            PersonaId::Musk => "musk",
        }
    }

    /// Human-readable speaker name, as it appears in transcripts
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaId::Jobs => "Steve Jobs",
            PersonaId::Musk => "Elon Musk",
        }
    }

    /// Emoji shown next to the speaker name
    pub fn icon(&self) -> &'static str {
        match self {
            PersonaId::Jobs => "🍎",
            PersonaId::Musk => "🚀",
        }
    }

    /// The other debater
    pub fn opponent(&self) -> PersonaId {
        match self {
            PersonaId::Jobs => PersonaId::Musk,
            PersonaId::Musk => PersonaId::Jobs,
        }
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A debating identity bound to a model backend (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub id: PersonaId,
    /// Short role line, e.g. "the visionary co-founder of Apple"
    pub role: &'static str,
    /// Organisations the persona is known for
    pub affiliation: &'static str,
    /// Traits that shape the debate style
    pub characteristics: &'static [&'static str],
    /// What the persona should reference when arguing
    pub reference_hint: &'static str,
    /// Argument dimension the summarizer should emphasise for this persona
    pub summary_focus: &'static str,
    /// Subjects the persona must never speak about in the first person
    pub forbidden_topics: &'static [&'static str],
    /// Model backend this persona speaks through
    pub model: Model,
}

const JOBS_CHARACTERISTICS: &[&str] = &[
    "Obsession with product perfection and user experience",
    "\"Think Different\" philosophy and innovation through simplicity",
    "Focus on intersection of technology and liberal arts",
    "Strong belief in closed, integrated ecosystems",
    "Revolutionary products: Mac, iPod, iPhone, iPad",
];

const MUSK_CHARACTERISTICS: &[&str] = &[
    "Forward-thinking and ambitious goals",
    "Focus on sustainability and multi-planetary existence",
    "Direct and sometimes provocative communication style",
    "Emphasis on first-principles thinking",
    "References to Tesla, SpaceX, and other ventures",
];

impl Persona {
    pub fn jobs(model: Model) -> Self {
        Self {
            id: PersonaId::Jobs,
            role: "the visionary co-founder of Apple",
            affiliation: "Apple",
            characteristics: JOBS_CHARACTERISTICS,
            reference_hint: "Reference Apple's achievements and your vision",
            summary_focus: "focus on user experience, design, and integrated ecosystems",
            forbidden_topics: &[],
            model,
        }
    }

    pub fn musk(model: Model) -> Self {
        Self {
            id: PersonaId::Musk,
            role: "CEO of Tesla and SpaceX",
            affiliation: "Tesla/SpaceX",
            characteristics: MUSK_CHARACTERISTICS,
            reference_hint: "Reference your companies' achievements and vision",
            summary_focus: "emphasis on sustainable technology and pushing technological boundaries",
            forbidden_topics: &["Apple"],
            model,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.id.display_name()
    }

    /// Name this persona must never impersonate
    pub fn forbidden_impersonation(&self) -> &'static str {
        self.id.opponent().display_name()
    }
}
