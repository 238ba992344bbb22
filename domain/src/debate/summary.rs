//! Summary log entities

use serde::{Deserialize, Serialize};

/// Condensed recap of one fixed-size block of the transcript (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Position in the summary log
    pub index: usize,
    /// First transcript index covered (inclusive)
    pub start: usize,
    /// Last transcript index covered (exclusive)
    pub end: usize,
    pub text: String,
    pub success: bool,
}

impl Digest {
    pub fn success(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            index: 0,
            start,
            end,
            text: text.into(),
            success: true,
        }
    }

    pub fn failure(start: usize, end: usize, error: impl std::fmt::Display) -> Self {
        Self {
            index: 0,
            start,
            end,
            text: format!("Error summarizing turns {}-{}: {}", start + 1, end, error),
            success: false,
        }
    }
}

/// Ordered, append-only list of digests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryLog {
    digests: Vec<Digest>,
}

impl SummaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut digest: Digest) -> &Digest {
        digest.index = self.digests.len();
        self.digests.push(digest);
        &self.digests[self.digests.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn entries(&self) -> &[Digest] {
        &self.digests
    }

    /// All digest texts in order, one per line; the judge's debate transcript
    pub fn joined(&self) -> String {
        self.digests
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn clear(&mut self) {
        self.digests.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_preserves_order() {
        let mut log = SummaryLog::new();
        log.push(Digest::success(0, 10, "first"));
        log.push(Digest::success(10, 20, "second"));
        assert_eq!(log.joined(), "first\nsecond");
        assert_eq!(log.entries()[1].index, 1);
    }

    #[test]
    fn test_empty_log_joins_to_empty_string() {
        assert_eq!(SummaryLog::new().joined(), "");
    }

    #[test]
    fn test_failure_text_uses_one_based_range() {
        let digest = Digest::failure(10, 20, "timeout");
        assert_eq!(digest.text, "Error summarizing turns 11-20: timeout");
        assert!(!digest.success);
    }
}
