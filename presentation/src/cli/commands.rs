//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the debate report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transcript, summaries and verdict
    Full,
    /// Only the turn-by-turn transcript
    Transcript,
    /// Only the judge's verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for debate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => debate_domain::OutputFormat::Full,
            OutputFormat::Transcript => debate_domain::OutputFormat::Transcript,
            OutputFormat::Verdict => debate_domain::OutputFormat::Verdict,
            OutputFormat::Json => debate_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for titans-debate
#[derive(Parser, Debug)]
#[command(name = "titans-debate")]
#[command(author, version, about = "Steve Jobs vs Elon Musk - an LLM debate with a judge")]
#[command(long_about = r#"
Titans Debate stages a debate between two LLM personas, Steve Jobs and
Elon Musk, each bound to its own model backend.

The run has three parts:
1. Debate: the personas alternate for a fixed number of turns, each
   answering the other's latest point
2. Summaries: every 10 turns the judge model condenses the last block
3. Verdict: the judge weighs all summaries and declares a winner

Credentials are read from OPENAI_API_KEY and GROQ_API_KEY (a .env file
in the working directory is loaded first).

Configuration files are loaded from (in priority order):
1. TITANS_DEBATE_* environment variables (e.g. TITANS_DEBATE_DEBATE__TURNS=20)
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/titans-debate/config.toml   Global config

Example:
  titans-debate
  titans-debate --turns 20 -o transcript
  titans-debate --seed "Is AI a net good?" --no-judge
"#)]
pub struct Cli {
    /// Number of turns (overrides [debate] turns)
    #[arg(short, long, value_name = "N")]
    pub turns: Option<usize>,

    /// Opening prompt handed to the first speaker
    #[arg(short, long, value_name = "TEXT")]
    pub seed: Option<String>,

    /// Skip the judge after the debate
    #[arg(long)]
    pub no_judge: bool,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective values, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for a daily rolling diagnostic log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the debate as JSONL events to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["titans-debate"]);
        assert_eq!(cli.turns, None);
        assert!(!cli.no_judge);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "titans-debate",
            "--turns",
            "20",
            "--seed",
            "Is AI a net good?",
            "-o",
            "json",
            "-vv",
            "--no-judge",
        ]);
        assert_eq!(cli.turns, Some(20));
        assert_eq!(cli.seed.as_deref(), Some("Is AI a net good?"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_judge);
        assert_eq!(
            debate_domain::OutputFormat::from(OutputFormat::Json),
            debate_domain::OutputFormat::Json
        );
    }
}
