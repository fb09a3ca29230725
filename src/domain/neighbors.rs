//! Moore-neighborhood counting over the interior window of a grid.
//!
//! Only cells with a full 3x3 neighborhood inside the grid are counted.
//! The outer ring is never computed and its entries stay zero.

use super::{CellState, Grid, GridError};

/// Live-neighbor counts with the same shape as the grid they came from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NeighborCountGrid {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighborCountGrid {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            counts: vec![0; rows * cols],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Count at position (with bounds checking). Border entries read as 0.
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.counts[row * self.cols + col])
        } else {
            Err(GridError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Unchecked row-major access for the rule engine's interior loop
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.cols + col]
    }
}

/// Sum of live cells in the 3x3 window around (row, col), minus the cell itself.
/// Caller guarantees (row, col) is interior.
#[inline]
fn window_sum(cells: &[CellState], cols: usize, row: usize, col: usize) -> u8 {
    let mut total = 0u8;
    for r in row - 1..=row + 1 {
        let base = r * cols;
        for c in col - 1..=col + 1 {
            if (r, c) != (row, col) && cells[base + c].is_alive() {
                total += 1;
            }
        }
    }
    total
}

/// Count live neighbors of every interior cell.
pub fn count_neighbors(grid: &Grid) -> NeighborCountGrid {
    let (rows, cols) = grid.dimensions();
    let mut counts = NeighborCountGrid::zeroed(rows, cols);
    let cells = grid.cells();

    for row in 1..rows.saturating_sub(1) {
        for col in 1..cols.saturating_sub(1) {
            counts.counts[row * cols + col] = window_sum(cells, cols, row, col);
        }
    }

    counts
}
