//! Transcript entities and context windowing

use crate::persona::entities::PersonaId;
use serde::{Deserialize, Serialize};

/// One utterance in the debate (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Zero-based position in the transcript
    pub index: usize,
    pub speaker: PersonaId,
    pub text: String,
    /// `false` when `text` is a recorded backend error rather than dialogue
    pub success: bool,
}

impl Turn {
    pub fn success(speaker: PersonaId, text: impl Into<String>) -> Self {
        Self {
            index: 0,
            speaker,
            text: text.into(),
            success: true,
        }
    }

    /// A turn whose text is the visible error line for a failed backend call
    pub fn failure(speaker: PersonaId, error: impl std::fmt::Display) -> Self {
        Self {
            index: 0,
            speaker,
            text: Self::error_text(speaker, &error),
            success: false,
        }
    }

    /// Error line recorded in place of a persona's response
    pub fn error_text(speaker: PersonaId, error: &dyn std::fmt::Display) -> String {
        format!("Error generating {}'s response: {}", speaker.display_name(), error)
    }
}

/// Returns the trailing `k` entries of `entries` (fewer if shorter), in order.
pub fn context_window(entries: &[Turn], k: usize) -> &[Turn] {
    &entries[entries.len().saturating_sub(k)..]
}

/// Renders entries as `Speaker: text` lines, the format used inside prompts.
pub fn render_lines(entries: &[Turn]) -> String {
    entries
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker.display_name(), turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered, append-only record of the debate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, assigning its index. Returns the stored turn.
    pub fn push(&mut self, mut turn: Turn) -> &Turn {
        turn.index = self.turns.len();
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn entries(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Trailing `k` turns, see [`context_window`]
    pub fn window(&self, k: usize) -> &[Turn] {
        context_window(&self.turns, k)
    }

    /// Turns in `[start, end)`, clamped to the transcript length
    pub fn slice(&self, start: usize, end: usize) -> &[Turn] {
        let end = end.min(self.turns.len());
        let start = start.min(end);
        &self.turns[start..end]
    }

    /// Whether speakers strictly alternate starting from `first`
    pub fn alternates_from(&self, first: PersonaId) -> bool {
        self.turns.iter().enumerate().all(|(i, turn)| {
            let expected = if i % 2 == 0 { first } else { first.opponent() };
            turn.speaker == expected
        })
    }

    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_of(n: usize) -> Transcript {
        let mut t = Transcript::new();
        for i in 0..n {
            let speaker = if i % 2 == 0 { PersonaId::Jobs } else { PersonaId::Musk };
            t.push(Turn::success(speaker, format!("t{i}")));
        }
        t
    }

    #[test]
    fn test_window_returns_trailing_entries_in_order() {
        let t = transcript_of(8);
        let texts: Vec<_> = t.window(5).iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["t3", "t4", "t5", "t6", "t7"]);
    }

    #[test]
    fn test_window_length_is_min_of_k_and_len() {
        for len in 0..12 {
            let t = transcript_of(len);
            for k in 0..15 {
                let window = t.window(k);
                assert_eq!(window.len(), k.min(len));
                if let Some(first) = window.first() {
                    assert_eq!(first.index, len - window.len());
                }
            }
        }
    }

    #[test]
    fn test_window_of_empty_transcript_is_empty() {
        assert!(context_window(&[], 5).is_empty());
        assert_eq!(render_lines(context_window(&[], 5)), "");
    }

    #[test]
    fn test_push_assigns_indices() {
        let t = transcript_of(3);
        let indices: Vec<_> = t.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_render_lines() {
        let t = transcript_of(2);
        assert_eq!(render_lines(t.entries()), "Steve Jobs: t0\nElon Musk: t1");
    }

    #[test]
    fn test_failure_text_format() {
        let turn = Turn::failure(PersonaId::Jobs, "rate limited");
        assert!(!turn.success);
        assert_eq!(turn.text, "Error generating Steve Jobs's response: rate limited");
    }

    #[test]
    fn test_alternation_check() {
        let t = transcript_of(5);
        assert!(t.alternates_from(PersonaId::Jobs));
        assert!(!t.alternates_from(PersonaId::Musk));

        let mut broken = transcript_of(2);
        broken.push(Turn::success(PersonaId::Musk, "out of order"));
        assert!(!broken.alternates_from(PersonaId::Jobs));
    }

    #[test]
    fn test_slice_is_clamped() {
        let t = transcript_of(4);
        assert_eq!(t.slice(2, 10).len(), 2);
        assert!(t.slice(6, 10).is_empty());
    }
}
