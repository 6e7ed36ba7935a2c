//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Difficulty, Opponent};

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Best-of-five tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who plays O: human or computer
        #[arg(long)]
        opponent: Option<Opponent>,

        /// Computer strength: random (easy) or optimal (unbeatable)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play computer against computer and print the tally
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Strategy for X
        #[arg(short, long, default_value = "random")]
        x: Difficulty,

        /// Strategy for O
        #[arg(short, long, default_value = "optimal")]
        o: Difficulty,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
