//! Guess Number
//!
//! Console entry point. Flags are parsed, tracing goes to stderr, and the
//! game talks to the player on stdin/stdout.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use guess_number::{app, AppConfig, Cli, DeterministicRng, GameError, VERSION};

fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::from(Cli::parse());
    init_tracing(&config.log_level)?;

    info!("Guess Number v{}", VERSION);

    let source = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            DeterministicRng::new(seed)
        }
        None => DeterministicRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match app::run(&config, source, &mut input, &mut output) {
        Ok(report) => {
            if tracing::enabled!(Level::INFO) {
                let json = serde_json::to_string(&report).context("Failed to encode session report")?;
                info!(report = %json, "session report");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(GameError::InvalidSelection(selection)) => {
            warn!(%selection, "no session started");
            Ok(ExitCode::from(2))
        }
        Err(GameError::InputClosed) => {
            error!("input closed before the game finished");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("game session failed"),
    }
}

/// Install the global subscriber, writing to stderr.
fn init_tracing(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid --log-level {directive:?}"))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}
