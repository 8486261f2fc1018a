//! Command-line interface for the sokoban binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sokoban_rules::level_text::Notation;

/// Sokoban rules engine: replay move strings or play interactively
#[derive(Parser, Debug)]
#[command(name = "sokoban")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a move string to a level and print the resulting board
    Run {
        /// Level file. The built-in level is used when omitted.
        #[arg(long)]
        level: Option<PathBuf>,

        /// Moves as U/D/L/R symbols in either case, with no separators
        #[arg(short, long, default_value = "")]
        moves: String,

        #[arg(long, value_enum, default_value_t = Notation::Letters)]
        notation: Notation,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Play a level in the terminal
    Play {
        /// Level file. The built-in level is used when omitted.
        #[arg(long)]
        level: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Notation::Letters)]
        notation: Notation,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
