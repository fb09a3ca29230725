use super::{CellState, GridError};

/// Grid is the fixed-size, row-major cell buffer of the automaton.
/// Dimensions are set once at construction and never change.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        }
    }

    /// Build a grid from text rows, `#` or `O` for alive and `.` for dead.
    ///
    /// Every row must have the same width. Unknown characters count as dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(rows.len(), cols);

        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::ShapeMismatch {
                    expected: (rows.len(), cols),
                    actual: (r, width),
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let idx = grid.index(r, c);
                grid.cells[idx] = CellState::from_char(ch).unwrap_or_default();
            }
        }

        Ok(grid)
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(GridError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.check(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position. An out-of-range write changes nothing.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// True for cells on the outermost ring (row 0, row M-1, col 0, col N-1)
    pub const fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    pub const fn is_interior(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && !self.is_border(row, col)
    }

    /// Row-major slice of the raw cells
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &state)| (idx / self.cols, idx % self.cols, state))
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::Dead);
        self
    }

    /// Render as text rows, the inverse of `from_rows`
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                self.cells[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .map(|cell| cell.to_char())
                    .collect()
            })
            .collect()
    }
}
