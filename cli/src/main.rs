//! CLI entrypoint for Titans Debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use debate_application::{
    DebateEngine, DebateProgressNotifier, NoProgress, RunDebateError,
};
use debate_domain::{DomainError, OutputFormat};
use debate_infrastructure::{
    ConfigLoader, Credentials, FileConfig, JsonlConversationLogger, RoutingGateway,
};
use debate_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials and TITANS_DEBATE_* overrides may live in .env
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!("\nEffective configuration:\n");
        println!("{}", file_config.to_toml_string()?);
        return Ok(());
    }

    let log_dir = cli.log_dir.clone().or_else(|| file_config.logging.log_dir.clone());
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref());

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Titans Debate");

    let mut config = file_config.to_debate_config();
    if let Some(turns) = cli.turns {
        if turns == 0 {
            bail!("--turns must be greater than zero");
        }
        config.execution_mut().turns = turns;
    }
    if let Some(seed) = &cli.seed {
        if seed.trim().is_empty() {
            bail!("--seed must not be empty");
        }
        config.execution_mut().seed_prompt = seed.clone();
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    // Fail fast on missing credentials before any backend call
    let provider_config = file_config.to_provider_config();
    let credentials = Credentials::from_env(&provider_config, file_config.required_providers())?;
    let gateway = Arc::new(RoutingGateway::connect(provider_config, &credentials)?);

    let mut engine = DebateEngine::new(gateway, &config);
    if let Some(logger) = conversation_logger(&cli, &file_config) {
        engine = engine.with_logger(logger);
    }

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let progress: Box<dyn DebateProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = engine
        .start_debate_with(progress.as_ref(), Some(cancel.clone()))
        .await;

    let halted = match outcome {
        Ok(output) => {
            info!(
                "Debate finished: {} turns ({} failed), {} summaries",
                output.turns, output.failed_turns, output.summaries
            );
            None
        }
        Err(RunDebateError::Cancelled { turns }) => {
            eprintln!("Debate cancelled after {} turns; skipping the verdict.", turns);
            None
        }
        Err(err @ RunDebateError::Backend { .. }) => {
            warn!("{}", err);
            Some(err)
        }
        Err(err) => return Err(err.into()),
    };

    let completed = engine.session().phase() == debate_domain::DebatePhase::Completed;
    if completed && !cli.no_judge {
        match engine
            .judge_debate_with(progress.as_ref(), Some(cancel.clone()))
            .await
        {
            Ok(_) => {}
            Err(DomainError::Cancelled) => eprintln!("Interrupted; skipping the verdict."),
            Err(err) => return Err(err.into()),
        }
    }

    println!("{}", ConsoleFormatter.render(format, engine.session()));

    match halted {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// First Ctrl-C cancels the debate or verdict in flight; a second one
/// exits immediately.
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        cancel.cancel();
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

/// Install the stderr subscriber plus an optional daily rolling file.
///
/// The returned guard flushes the file writer when dropped.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "titans-debate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn conversation_logger(
    cli: &Cli,
    file_config: &FileConfig,
) -> Option<Arc<JsonlConversationLogger>> {
    let path = cli
        .conversation_log
        .clone()
        .or_else(|| file_config.logging.conversation_log.clone())?;

    match JsonlConversationLogger::new(&path) {
        Ok(logger) => {
            info!("Writing conversation log to {}", logger.path().display());
            Some(Arc::new(logger))
        }
        Err(e) => {
            warn!("Conversation log disabled: cannot open {}: {}", path.display(), e);
            None
        }
    }
}
