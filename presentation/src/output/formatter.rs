//! Output formatter trait

use debate_domain::{DebateSession, OutputFormat};

/// Trait for rendering a debate session
pub trait OutputFormatter {
    /// Transcript, summaries and verdict
    fn format_full(&self, session: &DebateSession) -> String;

    fn format_transcript(&self, session: &DebateSession) -> String;

    fn format_verdict(&self, session: &DebateSession) -> String;

    /// Format as JSON
    fn format_json(&self, session: &DebateSession) -> String;

    fn render(&self, format: OutputFormat, session: &DebateSession) -> String {
        match format {
            OutputFormat::Full => self.format_full(session),
            OutputFormat::Transcript => self.format_transcript(session),
            OutputFormat::Verdict => self.format_verdict(session),
            OutputFormat::Json => self.format_json(session),
        }
    }
}
