//! Command-line interface for strictly_shogi.

use clap::{Parser, Subcommand};

/// Strictly Shogi - mirror and play a server-hosted shogi game
#[derive(Parser, Debug)]
#[command(name = "strictly_shogi")]
#[command(about = "Client for server-authoritative shogi areas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client configuration file
    #[arg(short, long, default_value = "strictly_shogi.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Follow the area and print the board whenever it changes
    Watch,

    /// Join the area's game
    Join,

    /// Leave the current game
    Leave,

    /// Start a game that is waiting to start
    Start,

    /// Play a move from one square to another
    Move {
        /// Origin row (0-8)
        from_row: u8,
        /// Origin column (0-8)
        from_col: u8,
        /// Destination row (0-8)
        to_row: u8,
        /// Destination column (0-8)
        to_col: u8,
    },
}
