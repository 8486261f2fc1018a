//! Text encoding of boards and move sequences.
//!
//! Two board notations are understood. [`Notation::Letters`] uses `p`/`P` for
//! the agent and `b`/`B` for markers, with the uppercase form meaning "on
//! storage". [`Notation::Xsb`] is the classic `@ + $ * .` notation.
//! Rendering is canonical, so text that used unknown symbols for floor will
//! not round-trip byte for byte.

use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, BoundedGrid, Cell, Direction, Position, UnrecognizedSymbol};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Letters,
    Xsb,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Occupant {
    Agent,
    Marker,
}

/// Symbols used to draw each combination of terrain and occupant.
struct SymbolTable {
    wall: char,
    open: char,
    storage: char,
    agent_on_open: char,
    agent_on_storage: char,
    marker_on_open: char,
    marker_on_storage: char,
}

const LETTERS: SymbolTable = SymbolTable {
    wall: '#',
    open: ' ',
    storage: '*',
    agent_on_open: 'p',
    agent_on_storage: 'P',
    marker_on_open: 'b',
    marker_on_storage: 'B',
};

const XSB: SymbolTable = SymbolTable {
    wall: '#',
    open: ' ',
    storage: '.',
    agent_on_open: '@',
    agent_on_storage: '+',
    marker_on_open: '$',
    marker_on_storage: '*',
};

impl Notation {
    fn symbols(self) -> &'static SymbolTable {
        match self {
            Notation::Letters => &LETTERS,
            Notation::Xsb => &XSB,
        }
    }
}

impl SymbolTable {
    fn decode(&self, ch: char) -> (Cell, Option<Occupant>) {
        match ch {
            c if c == self.wall => (Cell::Wall, None),
            c if c == self.storage => (Cell::Storage, None),
            c if c == self.agent_on_open => (Cell::Open, Some(Occupant::Agent)),
            c if c == self.agent_on_storage => (Cell::Storage, Some(Occupant::Agent)),
            c if c == self.marker_on_open => (Cell::Open, Some(Occupant::Marker)),
            c if c == self.marker_on_storage => (Cell::Storage, Some(Occupant::Marker)),
            _ => (Cell::Open, None),
        }
    }

    fn encode(&self, cell: Cell, occupant: Option<Occupant>) -> char {
        match (cell, occupant) {
            (Cell::Wall, _) => self.wall,
            (Cell::Open, None) => self.open,
            (Cell::Storage, None) => self.storage,
            (Cell::Open, Some(Occupant::Agent)) => self.agent_on_open,
            (Cell::Storage, Some(Occupant::Agent)) => self.agent_on_storage,
            (Cell::Open, Some(Occupant::Marker)) => self.marker_on_open,
            (Cell::Storage, Some(Occupant::Marker)) => self.marker_on_storage,
        }
    }
}

/// Builds a board from its text form. Empty lines are skipped and short rows
/// are padded with open floor.
pub fn parse_level(s: &str, notation: Notation) -> Result<Board, BoardError> {
    let symbols = notation.symbols();
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut agent: Option<Position> = None;
    let mut markers: Vec<Position> = Vec::new();

    for line in s.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let y = rows.len() as i32;
        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y);
            let (cell, occupant) = symbols.decode(ch);
            match occupant {
                Some(Occupant::Agent) => {
                    if let Some(first) = agent {
                        return Err(BoardError::MultipleAgents { first, second: pos });
                    }
                    agent = Some(pos);
                }
                Some(Occupant::Marker) => markers.push(pos),
                None => {}
            }
            row.push(cell);
        }
        rows.push(row);
    }

    let agent = agent.ok_or(BoardError::NoAgentFound)?;
    Board::new(BoundedGrid::from_rows(rows, Cell::Open), agent, markers)
}

/// Draws the board, one newline-terminated line per row.
pub fn render_board(board: &Board, notation: Notation) -> String {
    let symbols = notation.symbols();
    let mut result = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let pos = Position::new(x, y);
            let occupant = if pos == board.agent() {
                Some(Occupant::Agent)
            } else if board.markers().has_marker_at(&pos) {
                Some(Occupant::Marker)
            } else {
                None
            };
            result.push(symbols.encode(board.grid()[&pos], occupant));
        }
        result.push('\n');
    }
    result
}

/// Lazily decodes a move string of bare U/D/L/R symbols. Any other character,
/// whitespace included, is unrecognized and ends the iterator.
pub struct Directions<'a> {
    chars: Chars<'a>,
    failed: bool,
}

impl Iterator for Directions<'_> {
    type Item = Result<Direction, UnrecognizedSymbol>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let symbol = self.chars.next()?;
        let decoded = Direction::try_from(symbol);
        self.failed = decoded.is_err();
        Some(decoded)
    }
}

pub fn parse_directions(s: &str) -> Directions<'_> {
    Directions {
        chars: s.chars(),
        failed: false,
    }
}

/// Decodes a whole move string, or nothing at all.
pub fn parse_direction_sequence(s: &str) -> Result<Vec<Direction>, UnrecognizedSymbol> {
    parse_directions(s).collect()
}

/// Canonical move string for a sequence of directions.
pub fn render_directions(directions: &[Direction]) -> String {
    directions.iter().map(|d| d.symbol()).collect()
}
