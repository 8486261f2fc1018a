//! Applies whole move sequences. A sequence stops at its first rejected
//! move, and the failure is reported together with the last valid board.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::core::{step, Board, BoardError, ChangeType, Direction, MovementError, UnrecognizedSymbol};
use crate::level_text::{parse_direction_sequence, parse_level, Notation};

/// A sequence that was applied in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub board: Board,
    pub changes: Vec<ChangeType>,
}

/// A sequence that stopped early.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("move {step} ({direction}) rejected: {error}")]
pub struct Halted {
    /// Board after the last accepted move.
    pub board: Board,
    /// Zero-based index of the rejected move.
    pub step: usize,
    pub direction: Direction,
    #[source]
    pub error: MovementError,
    /// Changes of the moves that were accepted before the rejection.
    pub changes: Vec<ChangeType>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid level: {0}")]
    Level(#[from] BoardError),

    #[error("invalid move string: {0}")]
    Moves(#[from] UnrecognizedSymbol),

    #[error(transparent)]
    Halted(#[from] Halted),
}

impl Board {
    pub fn apply_all<I>(&self, directions: I) -> Result<Replay, Halted>
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut board = self.clone();
        let mut changes = Vec::new();
        for (index, direction) in directions.into_iter().enumerate() {
            match step(&board, direction) {
                Ok(next) => {
                    debug!(step = index, %direction, agent = %next.board.agent(), change = ?next.change, "move applied");
                    board = next.board;
                    changes.push(next.change);
                }
                Err(error) => {
                    warn!(step = index, %direction, %error, "move rejected, stopping");
                    return Err(Halted {
                        board,
                        step: index,
                        direction,
                        error,
                        changes,
                    });
                }
            }
        }
        Ok(Replay { board, changes })
    }
}

/// Decodes a level and a move string, then replays the moves.
///
/// The move string is decoded in full before any move is applied, so a bad
/// symbol anywhere in it applies nothing.
#[instrument(skip(level, moves))]
pub fn run_level(level: &str, moves: &str, notation: Notation) -> Result<Replay, SessionError> {
    let board = parse_level(level, notation)?;
    let directions = parse_direction_sequence(moves)?;
    debug!(moves = directions.len(), markers = board.markers().len(), "level decoded");
    Ok(board.apply_all(directions)?)
}
