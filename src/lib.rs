//! Movement rules for a Sokoban-style puzzle: one agent pushing markers
//! around a walled grid, with every move validated and applied atomically.

pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod level_text;
pub mod models;
pub mod replay;

#[cfg(test)]
mod test;
