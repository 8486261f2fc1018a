use crate::core::bounds::Bounds;
use crate::core::models::Position;

/// Fixed-size rectangular storage addressed by [`Position`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: Bounds,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from rows, padding short rows with `fill`.
    pub fn from_rows(rows: Vec<Vec<T>>, fill: T) -> Self
    where
        T: Clone,
    {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let bounds = Bounds::new(width as i32, rows.len() as i32);
        let mut cells = Vec::with_capacity(width * rows.len());
        for mut row in rows {
            row.resize(width, fill.clone());
            cells.extend(row);
        }
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.bounds.positions().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[(index.y * self.bounds.width + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Position> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.width + index.x) as usize]
    }
}
