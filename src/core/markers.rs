use crate::core::models::Position;

/// Marker positions, kept sorted so equality and hashing ignore the order
/// markers were found or moved in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Markers {
    positions: Vec<Position>,
}

impl Markers {
    /// Returns the first position that appears twice, if any.
    pub(crate) fn new(mut positions: Vec<Position>) -> Result<Markers, Position> {
        positions.sort_unstable();
        if let Some(pair) = positions.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(pair[0]);
        }
        Ok(Markers { positions })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_marker_at(&self, position: &Position) -> bool {
        self.positions.binary_search(position).is_ok()
    }

    pub fn index_of_marker_at(&self, position: &Position) -> Option<usize> {
        self.positions.binary_search(position).ok()
    }

    /// Caller guarantees `position` is not already occupied by another marker.
    pub(crate) fn set_marker(&mut self, index: usize, position: Position) {
        self.positions[index] = position;
        self.positions.sort_unstable();
    }
}
