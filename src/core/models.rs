use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::markers::Markers;

/// Terrain of a single tile. Only walls matter to the movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Open,
    Wall,
    Storage,
}

/// Grid coordinate. `y` grows downward, the way the board is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a successful transition moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    AgentMove,
    AgentAndMarkerMove,
}

/// Terrain plus occupants. Terrain is fixed at construction; only the agent
/// and markers change, and only through [`crate::core::step`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) grid: BoundedGrid<Cell>,
    pub(crate) agent: Position,
    pub(crate) markers: Markers,
}

/// Result of one accepted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    pub change: ChangeType,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
