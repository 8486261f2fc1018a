use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::{BoardError, UnrecognizedSymbol};
use crate::core::markers::Markers;
use crate::core::models::{Board, Cell, Direction, Position};

impl Position {
    pub fn stepped(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Canonical move symbol.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Move symbols are accepted in either case.
impl TryFrom<char> for Direction {
    type Error = UnrecognizedSymbol;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(UnrecognizedSymbol { symbol }),
        }
    }
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Open | Cell::Storage)
    }
}

impl Board {
    pub fn new(
        grid: BoundedGrid<Cell>,
        agent: Position,
        markers: Vec<Position>,
    ) -> Result<Board, BoardError> {
        for position in std::iter::once(&agent).chain(markers.iter()) {
            match grid.get(position) {
                None => return Err(BoardError::OutOfBounds(*position)),
                Some(Cell::Wall) => return Err(BoardError::OnWall(*position)),
                Some(_) => {}
            }
        }
        let markers = Markers::new(markers).map_err(BoardError::DuplicateMarker)?;
        if markers.has_marker_at(&agent) {
            return Err(BoardError::AgentOnMarker(agent));
        }
        Ok(Board {
            grid,
            agent,
            markers,
        })
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn grid(&self) -> &BoundedGrid<Cell> {
        &self.grid
    }

    /// Terrain at `position`, or `None` outside the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.grid.get(&position).copied()
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width
    }

    pub fn height(&self) -> i32 {
        self.grid.size().height
    }

    pub fn storage_count(&self) -> usize {
        self.grid.iter().filter(|&(_, &c)| c == Cell::Storage).count()
    }

    pub fn markers_on_storage(&self) -> usize {
        self.markers
            .iter()
            .filter(|&&m| self.cell(m) == Some(Cell::Storage))
            .count()
    }

    /// Every storage cell holds a marker. A board without storage is never solved.
    pub fn is_solved(&self) -> bool {
        let mut storage = self
            .grid
            .iter()
            .filter(|&(_, &c)| c == Cell::Storage)
            .peekable();
        storage.peek().is_some() && storage.all(|(p, _)| self.markers.has_marker_at(&p))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn open_grid(width: usize, height: usize) -> BoundedGrid<Cell> {
        BoundedGrid::from_rows(vec![vec![Cell::Open; width]; height], Cell::Open)
    }

    #[test]
    fn stepped_moves_one_unit_along_axis() {
        let origin = Position::new(4, 4);

        assert_eq!(origin.stepped(Direction::Up), Position::new(4, 3));
        assert_eq!(origin.stepped(Direction::Down), Position::new(4, 5));
        assert_eq!(origin.stepped(Direction::Left), Position::new(3, 4));
        assert_eq!(origin.stepped(Direction::Right), Position::new(5, 4));
    }

    #[test]
    fn direction_symbols_ignore_case() {
        assert_eq!(Direction::try_from('u'), Ok(Direction::Up));
        assert_eq!(Direction::try_from('D'), Ok(Direction::Down));
        assert_eq!(Direction::try_from('l'), Ok(Direction::Left));
        assert_eq!(Direction::try_from('R'), Ok(Direction::Right));
        assert_eq!(
            Direction::try_from('x'),
            Err(UnrecognizedSymbol { symbol: 'x' })
        );
    }

    #[test]
    fn symbol_decodes_back_to_direction() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.symbol()), Ok(direction));
        }
    }

    #[test]
    fn new_rejects_agent_outside_grid() {
        let result = Board::new(open_grid(3, 1), Position::new(3, 0), vec![]);

        assert_eq!(result, Err(BoardError::OutOfBounds(Position::new(3, 0))));
    }

    #[test]
    fn new_rejects_marker_on_wall() {
        let mut grid = open_grid(3, 1);
        grid[&Position::new(2, 0)] = Cell::Wall;
        let result = Board::new(grid, Position::new(0, 0), vec![Position::new(2, 0)]);

        assert_eq!(result, Err(BoardError::OnWall(Position::new(2, 0))));
    }

    #[test]
    fn new_rejects_duplicate_markers() {
        let result = Board::new(
            open_grid(3, 1),
            Position::new(0, 0),
            vec![Position::new(1, 0), Position::new(1, 0)],
        );

        assert_eq!(result, Err(BoardError::DuplicateMarker(Position::new(1, 0))));
    }

    #[test]
    fn new_rejects_agent_on_marker() {
        let result = Board::new(open_grid(3, 1), Position::new(1, 0), vec![Position::new(1, 0)]);

        assert_eq!(result, Err(BoardError::AgentOnMarker(Position::new(1, 0))));
    }

    #[test]
    fn solved_requires_every_storage_filled() {
        let mut grid = open_grid(4, 1);
        grid[&Position::new(2, 0)] = Cell::Storage;
        grid[&Position::new(3, 0)] = Cell::Storage;

        let partial = Board::new(grid.clone(), Position::new(0, 0), vec![Position::new(2, 0)]).unwrap();
        assert_eq!(partial.markers_on_storage(), 1);
        assert_eq!(partial.storage_count(), 2);
        assert!(!partial.is_solved());

        let full = Board::new(
            grid,
            Position::new(0, 0),
            vec![Position::new(2, 0), Position::new(3, 0)],
        )
        .unwrap();
        assert!(full.is_solved());
    }

    #[test]
    fn board_without_storage_is_not_solved() {
        let board = Board::new(open_grid(2, 1), Position::new(0, 0), vec![]).unwrap();

        assert!(!board.is_solved());
    }
}
