// CLI Sokoban: replay a move string against a level, or play interactively.
// Letters notation: '#' wall, '*' storage, 'p'/'P' agent, 'b'/'B' marker (uppercase = on storage).

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sokoban_rules::console_interface::{cleanup_terminal, run_interactive, setup_terminal};
use sokoban_rules::json_export::RunReport;
use sokoban_rules::level_text::{parse_direction_sequence, parse_level, render_board, Notation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};

const BUILT_IN_LEVEL: &str = r#"
#############
#p        * #
#     b  b  #
# *         #
#############
"#;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            level,
            moves,
            notation,
            format,
        } => run_moves(level.as_deref(), &moves, notation, format),
        Command::Play { level, notation } => {
            play(level.as_deref(), notation)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_level(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading level file {}", path.display())),
        None => Ok(BUILT_IN_LEVEL.to_string()),
    }
}

/// Level and move string must both decode before any move is applied; only
/// surrounding whitespace is trimmed from the move string. A
/// rejected move stops the run; the board reached so far is still printed
/// and the process exits with status 1.
fn run_moves(
    level: Option<&Path>,
    moves: &str,
    notation: Notation,
    format: OutputFormat,
) -> Result<ExitCode> {
    let text = load_level(level)?;
    let board = parse_level(&text, notation).context("decoding level")?;
    let directions = parse_direction_sequence(moves.trim()).context("decoding moves")?;
    info!(moves = directions.len(), "replaying");

    let (report, last_board, exit) = match board.apply_all(directions) {
        Ok(replay) => (RunReport::from_replay(&replay, notation), replay.board, ExitCode::SUCCESS),
        Err(halted) => {
            warn!(step = halted.step, error = %halted.error, "run halted");
            (RunReport::from_halted(&halted, notation), halted.board, ExitCode::FAILURE)
        }
    };

    match format {
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
        OutputFormat::Text => {
            print!("{}", render_board(&last_board, notation));
            if let Some(failure) = &report.failure {
                eprintln!("move {} ({}) rejected: {}", failure.step, failure.direction, failure.error);
            } else if report.board.solved {
                println!("solved in {} moves", report.steps_applied);
            }
        }
    }

    Ok(exit)
}

fn play(level: Option<&Path>, notation: Notation) -> Result<()> {
    let text = load_level(level)?;
    let board = parse_level(&text, notation).context("decoding level")?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut terminal, board, notation);
    cleanup_terminal()?;

    let board = result?;
    print!("{}", render_board(&board, notation));
    Ok(())
}
