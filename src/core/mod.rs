mod bounded_grid;
mod bounds;
mod error;
mod markers;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::Bounds;
pub use error::{BoardError, MovementError, UnrecognizedSymbol};
pub use markers::Markers;
pub use models::{Board, Cell, ChangeType, Direction, Position, Step};
pub use update::step;
