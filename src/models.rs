use crate::core::{Board, ChangeType, MovementError};

/// Everything the interactive screen needs for one frame.
pub struct GameRenderState {
    pub board: Board,
    pub solved: bool,
    pub error: Option<MovementError>,
    pub last_change: Option<ChangeType>,
    pub moves: usize,
}
