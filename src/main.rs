//! Noughts - Unified CLI
//!
//! Terminal tic-tac-toe and headless computer self-play.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Difficulty, MatchConfig, Opponent, TicTacToePlayer, simulate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Log file for the terminal UI.
const TUI_LOG_PATH: &str = "noughts_tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            opponent,
            difficulty,
            seed,
        } => run_play(config, opponent, difficulty, seed).await,
        Command::Simulate {
            rounds,
            x,
            o,
            seed,
            json,
        } => run_simulate(rounds, x, o, seed, json),
    }
}

/// Run the terminal UI
#[instrument(skip_all)]
async fn run_play(
    config: Option<std::path::PathBuf>,
    opponent: Option<Opponent>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> Result<()> {
    initialize_tui_tracing(Path::new(TUI_LOG_PATH))?;

    let mut config = MatchConfig::load(config.as_deref()).context("Failed to load config")?;
    if let Some(opponent) = opponent {
        config = config.with_opponent(opponent);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    info!(?config, "Starting terminal match");
    tui::run_tui(config).await
}

/// Run a headless batch of computer-vs-computer rounds
#[instrument]
fn run_simulate(
    rounds: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(rounds, ?x, ?o, "Running simulation");
    let tally = simulate(rounds, x, o, &mut rng).context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("X ({}) vs O ({})", x, o);
        println!("{}", tally);
        for (player, strategy) in [(TicTacToePlayer::X, x), (TicTacToePlayer::O, o)] {
            if strategy == Difficulty::Optimal {
                println!("{} ({}) lost {} rounds", player, strategy, tally.losses(player));
            }
        }
    }

    Ok(())
}

/// Logs to a file so output does not corrupt the terminal UI.
///
/// Fails if the file cannot be created or a subscriber is already set.
fn initialize_tui_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path).context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize tracing")?;
    Ok(())
}
