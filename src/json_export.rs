use serde::{Deserialize, Serialize};

use crate::core::{Board, ChangeType, Direction, Position};
use crate::level_text::{render_board, Notation};
use crate::replay::{Halted, Replay};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardReport {
    pub width: i32,
    pub height: i32,
    pub agent: Position,
    pub markers: Vec<Position>,
    pub markers_on_storage: usize,
    pub storage_count: usize,
    pub solved: bool,
    pub rows: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub board: BoardReport,
    pub steps_applied: usize,
    pub changes: Vec<ChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReport>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FailureReport {
    pub step: usize,
    pub direction: Direction,
    pub position: Position,
    pub error: String,
}

impl BoardReport {
    pub fn new(board: &Board, notation: Notation) -> Self {
        BoardReport {
            width: board.width(),
            height: board.height(),
            agent: board.agent(),
            markers: board.markers().iter().copied().collect(),
            markers_on_storage: board.markers_on_storage(),
            storage_count: board.storage_count(),
            solved: board.is_solved(),
            rows: render_board(board, notation).lines().map(str::to_owned).collect(),
        }
    }
}

impl RunReport {
    pub fn from_replay(replay: &Replay, notation: Notation) -> Self {
        RunReport {
            board: BoardReport::new(&replay.board, notation),
            steps_applied: replay.changes.len(),
            changes: replay.changes.clone(),
            failure: None,
        }
    }

    pub fn from_halted(halted: &Halted, notation: Notation) -> Self {
        RunReport {
            board: BoardReport::new(&halted.board, notation),
            steps_applied: halted.changes.len(),
            changes: halted.changes.clone(),
            failure: Some(FailureReport {
                step: halted.step,
                direction: halted.direction,
                position: halted.error.position(),
                error: halted.error.to_string(),
            }),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
