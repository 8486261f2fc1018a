use thiserror::Error;

use crate::core::models::Position;

/// Why a transition was rejected. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MovementError {
    #[error("agent blocked by wall at {0}")]
    AgentBlockedByWall(Position),

    #[error("marker blocked by wall at {0}")]
    MarkerBlockedByWall(Position),

    #[error("marker blocked by another marker at {0}")]
    MarkerBlockedByMarker(Position),
}

impl MovementError {
    /// The destination that could not be entered.
    pub fn position(&self) -> Position {
        match *self {
            MovementError::AgentBlockedByWall(p)
            | MovementError::MarkerBlockedByWall(p)
            | MovementError::MarkerBlockedByMarker(p) => p,
        }
    }
}

/// Why no board could be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no agent found on board")]
    NoAgentFound,

    #[error("more than one agent on board: {first} and {second}")]
    MultipleAgents { first: Position, second: Position },

    #[error("position {0} lies outside the board")]
    OutOfBounds(Position),

    #[error("occupant placed on wall at {0}")]
    OnWall(Position),

    #[error("two markers at {0}")]
    DuplicateMarker(Position),

    #[error("agent and marker share {0}")]
    AgentOnMarker(Position),
}

/// A move symbol that names no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized direction symbol {symbol:?}")]
pub struct UnrecognizedSymbol {
    pub symbol: char,
}
