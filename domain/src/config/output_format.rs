//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Transcript, summaries and verdict (default)
    #[default]
    Full,
    /// Only the transcript
    Transcript,
    /// Only the verdict
    Verdict,
    /// JSON snapshot of the session
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Transcript).unwrap();
        assert_eq!(json, "\"transcript\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"verdict\"").unwrap();
        assert_eq!(format, OutputFormat::Verdict);
    }
}
