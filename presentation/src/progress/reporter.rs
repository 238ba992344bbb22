//! Progress reporting for debate execution

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use debate_application::ports::progress::DebateProgressNotifier;
use debate_domain::{DebatePhase, Digest, Persona, Turn, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const PREVIEW_CHARS: usize = 100;

/// Reports progress with a turn bar; each turn is printed above the bar
pub struct ProgressReporter {
    turn_bar: Mutex<Option<ProgressBar>>,
    judge_spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            turn_bar: Mutex::new(None),
            judge_spinner: Mutex::new(None),
        }
    }

    fn turn_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.turn_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// First `max` characters of `text` on one line
fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn phase_message(phase: DebatePhase) -> String {
    match phase {
        DebatePhase::Completed => "Debate complete!".green().to_string(),
        DebatePhase::Cancelled => "Debate cancelled".yellow().to_string(),
        DebatePhase::Failed => "Debate halted after a backend failure".red().to_string(),
        other => other.to_string(),
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_debate_start(&self, total_turns: usize) {
        let pb = ProgressBar::new(total_turns as u64);
        pb.set_style(Self::turn_style());
        pb.set_prefix("Debate");
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(120));
        if let Ok(mut guard) = self.turn_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_turn_start(&self, _index: usize, speaker: &Persona) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} is thinking...",
                ConsoleFormatter::speaker_label(speaker.id)
            ));
        });
    }

    fn on_turn(&self, turn: &Turn) {
        self.with_bar(|pb| {
            let text = preview(&turn.text, PREVIEW_CHARS);
            let text = if turn.success { text.normal() } else { text.red() };
            pb.println(format!("{}\n{}", ConsoleFormatter::turn_header(turn), text));
            pb.inc(1);
        });
    }

    fn on_summary(&self, digest: &Digest) {
        self.with_bar(|pb| {
            let mark = if digest.success { "v".green() } else { "x".red() };
            pb.println(format!(
                "{} {}",
                mark,
                format!("Summary of turns {}-{} recorded", digest.start + 1, digest.end).yellow()
            ));
        });
    }

    fn on_debate_complete(&self, phase: DebatePhase) {
        if let Ok(mut guard) = self.turn_bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(phase_message(phase));
        }
    }

    fn on_judging_start(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Judge");
        spinner.set_message("Weighing the summaries...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        if let Ok(mut guard) = self.judge_spinner.lock() {
            *guard = Some(spinner);
        }
    }

    fn on_verdict(&self, verdict: &Verdict) {
        if let Ok(mut guard) = self.judge_spinner.lock()
            && let Some(spinner) = guard.take()
        {
            let message = if verdict.success {
                "Verdict ready".green()
            } else {
                "Judging failed".red()
            };
            spinner.finish_with_message(message.to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_debate_start(&self, total_turns: usize) {
        eprintln!("{} {} ({} turns)", "->".cyan(), "Debate".bold(), total_turns);
    }

    fn on_turn(&self, turn: &Turn) {
        let mark = if turn.success { "v".green() } else { "x".red() };
        eprintln!(
            "  {} turn {} {}",
            mark,
            turn.index + 1,
            ConsoleFormatter::speaker_label(turn.speaker)
        );
    }

    fn on_summary(&self, digest: &Digest) {
        eprintln!(
            "  {} summary of turns {}-{}",
            "*".yellow(),
            digest.start + 1,
            digest.end
        );
    }

    fn on_debate_complete(&self, phase: DebatePhase) {
        eprintln!("{}", phase_message(phase));
    }

    fn on_judging_start(&self) {
        eprintln!("{} {}", "->".cyan(), "Judging".bold());
    }
}
