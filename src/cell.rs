/// A cell position on the unbounded grid, identified by `(row, col)`.
#[derive(Hash, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Cell { row, col }
    }

    /// The 8 cells horizontally, vertically, or diagonally adjacent to this one.
    ///
    /// Returns `None` when a ±1 offset would leave the representable
    /// coordinate range.
    pub fn neighbors(self) -> Option<[Cell; 8]> {
        let up = self.row.checked_sub(1)?;
        let down = self.row.checked_add(1)?;
        let left = self.col.checked_sub(1)?;
        let right = self.col.checked_add(1)?;
        Some([
            Cell::new(up, left),
            Cell::new(up, self.col),
            Cell::new(up, right),
            Cell::new(self.row, left),
            Cell::new(self.row, right),
            Cell::new(down, left),
            Cell::new(down, self.col),
            Cell::new(down, right),
        ])
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Cell { row, col }
    }
}
