//! Console output formatter for debate sessions

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use debate_domain::{DebateSession, PersonaId, Turn};
use serde_json::json;

/// Formats debate sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete debate: transcript, summaries and verdict
    pub fn format_full(session: &DebateSession) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Titans Debate"));
        output.push('\n');

        if let Some(seed) = session.seed_prompt() {
            output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), seed));
        }
        output.push_str(&format!(
            "{} {} ({} turns)\n",
            "Status:".cyan().bold(),
            session.phase(),
            session.transcript().len()
        ));

        output.push_str(&Self::section_header("Debate"));
        output.push_str(&Self::transcript_body(session));

        output.push_str(&Self::section_header("Summaries"));
        output.push_str(&Self::summaries_body(session));

        output.push_str(&Self::section_header("Verdict"));
        output.push_str(&Self::verdict_body(session));

        output.push_str(&Self::footer());
        output
    }

    /// Format only the turn-by-turn transcript
    pub fn format_transcript(session: &DebateSession) -> String {
        Self::transcript_body(session)
    }

    /// Format only the verdict (concise output)
    pub fn format_verdict(session: &DebateSession) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "=== Judge's Verdict ===".cyan().bold()));
        output.push_str(&Self::verdict_body(session));
        output
    }

    /// Format as JSON
    pub fn format_json(session: &DebateSession) -> String {
        let verdict = session.verdict().map(|v| {
            json!({
                "model": v.model,
                "success": v.success,
                "winner": v.declared_winner().map(|p| p.display_name()),
                "text": v.text,
            })
        });
        let turns: Vec<_> = session
            .transcript()
            .entries()
            .iter()
            .map(|t| {
                json!({
                    "index": t.index,
                    "speaker": t.speaker.display_name(),
                    "success": t.success,
                    "text": t.text,
                })
            })
            .collect();
        let report = json!({
            "phase": session.phase(),
            "seed_prompt": session.seed_prompt(),
            "transcript": turns,
            "summaries": session.summaries().entries(),
            "verdict": verdict,
        });
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Icon plus colored speaker name: Jobs blue, Musk magenta
    pub fn speaker_label(speaker: PersonaId) -> ColoredString {
        let label = format!("{} {}", speaker.icon(), speaker.display_name());
        match speaker {
            PersonaId::Jobs => label.blue().bold(),
            PersonaId::Musk => label.magenta().bold(),
        }
    }

    /// Turn header line, e.g. `── Turn 3 · Steve Jobs ──`
    pub fn turn_header(turn: &Turn) -> String {
        let label = Self::speaker_label(turn.speaker);
        if turn.success {
            format!("── Turn {} · {} ──", turn.index + 1, label)
        } else {
            format!("── Turn {} · {} {} ──", turn.index + 1, label, "(failed)".red())
        }
    }

    fn transcript_body(session: &DebateSession) -> String {
        let entries = session.transcript().entries();
        if entries.is_empty() {
            return format!("{}\n", "(no turns)".dimmed());
        }
        let mut output = String::new();
        for turn in entries {
            let text = if turn.success {
                turn.text.normal()
            } else {
                turn.text.red()
            };
            output.push_str(&format!("\n{}\n{}\n", Self::turn_header(turn), text));
        }
        output
    }

    fn summaries_body(session: &DebateSession) -> String {
        let digests = session.summaries().entries();
        if digests.is_empty() {
            return format!("{}\n", "(no summaries)".dimmed());
        }
        let mut output = String::new();
        for digest in digests {
            let title = format!("Summary {} (turns {}-{})", digest.index + 1, digest.start + 1, digest.end);
            let title = if digest.success {
                title.yellow().bold()
            } else {
                title.red().bold()
            };
            output.push_str(&format!("\n{}\n{}\n", title, Self::indent(&digest.text, "  ")));
        }
        output
    }

    fn verdict_body(session: &DebateSession) -> String {
        let Some(verdict) = session.verdict() else {
            return format!("{}\n", "(not judged)".dimmed());
        };
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", format!("Judge: {}", verdict.model).yellow().bold()));
        if verdict.success {
            output.push_str(&verdict.text);
        } else {
            output.push_str(&verdict.text.red().to_string());
        }
        output.push('\n');
        if let Some(winner) = verdict.declared_winner() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Winner:".green().bold(),
                Self::speaker_label(winner)
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, session: &DebateSession) -> String {
        Self::format_full(session)
    }

    fn format_transcript(&self, session: &DebateSession) -> String {
        Self::format_transcript(session)
    }

    fn format_verdict(&self, session: &DebateSession) -> String {
        Self::format_verdict(session)
    }

    fn format_json(&self, session: &DebateSession) -> String {
        Self::format_json(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{Digest, OutputFormat, Verdict};

    fn session() -> DebateSession {
        let mut session = DebateSession::new();
        session.begin("Who contributed more?").unwrap();
        session.record_turn(Turn::success(PersonaId::Jobs, "Design is how it works."));
        session.record_turn(Turn::failure(PersonaId::Musk, "Timeout"));
        session.record_digest(Digest::success(0, 2, "Jobs argued design."));
        session.finish();
        session.set_verdict(Verdict::success("mixtral-8x7b-32768", "Winner: Steve Jobs"));
        session
    }

    #[test]
    fn test_full_output_contains_all_sections() {
        let output = ConsoleFormatter.render(OutputFormat::Full, &session());
        assert!(output.contains("Who contributed more?"));
        assert!(output.contains("Design is how it works."));
        assert!(output.contains("Error generating Elon Musk's response: Timeout"));
        assert!(output.contains("Jobs argued design."));
        assert!(output.contains("Winner: Steve Jobs"));
    }

    #[test]
    fn test_unjudged_session() {
        let mut session = DebateSession::new();
        session.begin("X").unwrap();
        let output = ConsoleFormatter::format_verdict(&session);
        assert!(output.contains("(not judged)"));
        assert!(ConsoleFormatter::format_transcript(&session).contains("(no turns)"));
    }

    #[test]
    fn test_json_output() {
        let output = ConsoleFormatter::format_json(&session());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["phase"], "completed");
        assert_eq!(value["transcript"][0]["speaker"], "Steve Jobs");
        assert_eq!(value["transcript"][1]["success"], false);
        assert_eq!(value["summaries"][0]["end"], 2);
        assert_eq!(value["verdict"]["winner"], "Steve Jobs");
    }

    #[test]
    fn test_speaker_label_carries_icon() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::speaker_label(PersonaId::Jobs).to_string(),
            "🍎 Steve Jobs"
        );
        assert_eq!(
            ConsoleFormatter::speaker_label(PersonaId::Musk).to_string(),
            "🚀 Elon Musk"
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
