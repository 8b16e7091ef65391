//! Command-line interface for strictly_creatures.

use clap::{Parser, Subcommand};

/// Strictly Creatures - guess the creature from progressively revealed hints
#[derive(Parser, Debug)]
#[command(name = "strictly_creatures")]
#[command(about = "Hint-driven creature guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "strictly_creatures.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// File the TUI writes its logs to
        #[arg(long, default_value = "strictly_creatures.log")]
        log_file: std::path::PathBuf,
    },

    /// Fetch one creature and print it with all of its hints as JSON
    Fetch {
        /// Catalog identifier (random if omitted)
        #[arg(long)]
        id: Option<u32>,
    },
}
