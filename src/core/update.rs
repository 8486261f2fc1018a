use crate::core::error::MovementError;
use crate::core::models::{Board, ChangeType, Direction, Position, Step};

/// Advances the agent one cell, pushing at most one marker.
///
/// Every check runs against the current board before anything is built, so a
/// rejected move leaves `board` exactly as it was. Cells outside the grid are
/// treated as walls.
pub fn step(board: &Board, direction: Direction) -> Result<Step, MovementError> {
    let target = board.agent.stepped(direction);
    if !is_walkable(board, target) {
        return Err(MovementError::AgentBlockedByWall(target));
    }

    let pushed = match board.markers.index_of_marker_at(&target) {
        None => None,
        Some(index) => {
            let pushed_to = target.stepped(direction);
            if !is_walkable(board, pushed_to) {
                return Err(MovementError::MarkerBlockedByWall(pushed_to));
            }
            if board.markers.has_marker_at(&pushed_to) {
                return Err(MovementError::MarkerBlockedByMarker(pushed_to));
            }
            Some((index, pushed_to))
        }
    };

    let mut markers = board.markers.clone();
    let change = match pushed {
        Some((index, pushed_to)) => {
            markers.set_marker(index, pushed_to);
            ChangeType::AgentAndMarkerMove
        }
        None => ChangeType::AgentMove,
    };

    Ok(Step {
        board: Board {
            grid: board.grid.clone(),
            agent: target,
            markers,
        },
        change,
    })
}

fn is_walkable(board: &Board, position: Position) -> bool {
    board.cell(position).is_some_and(|c| c.is_walkable())
}

impl Board {
    /// Applies one direction, returning the next board or the reason it was refused.
    pub fn apply(&self, direction: Direction) -> Result<Board, MovementError> {
        step(self, direction).map(|step| step.board)
    }
}
