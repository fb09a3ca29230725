//! Rectangular sub-regions of a grid, copied out for display framing.

use std::ops::Range;

use super::{Grid, GridError};

/// Copy rows `rows` and columns `cols` into a new grid.
///
/// Ranges that reach past the grid fail with `IndexOutOfBounds`; reversed or
/// empty ranges give an empty grid.
pub fn extract(grid: &Grid, rows: Range<usize>, cols: Range<usize>) -> Result<Grid, GridError> {
    let (height, width) = grid.dimensions();
    if rows.end > height || cols.end > width {
        return Err(GridError::IndexOutOfBounds {
            row: rows.end.saturating_sub(1).max(rows.start),
            col: cols.end.saturating_sub(1).max(cols.start),
            rows: height,
            cols: width,
        });
    }

    Ok(copy_region(grid, rows, cols))
}

/// Caller guarantees both ranges end inside the grid.
fn copy_region(grid: &Grid, rows: Range<usize>, cols: Range<usize>) -> Grid {
    let width = grid.dimensions().1;
    let out_cols = cols.len();
    let mut view = Grid::new(rows.len(), out_cols);
    if view.is_empty() {
        return view;
    }

    let src = grid.cells();
    for (dst_row, src_row) in view.cells_mut().chunks_mut(out_cols).zip(rows) {
        let start = src_row * width + cols.start;
        dst_row.copy_from_slice(&src[start..start + out_cols]);
    }

    view
}

/// Bounds of the middle third along one axis: [floor(n/3), floor(2n/3))
pub const fn middle_third(n: usize) -> Range<usize> {
    n / 3..(2 * n) / 3
}

/// The central third of the grid in both directions.
/// Grids smaller than 3 along an axis give an empty viewport.
pub fn extract_middle_third(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    copy_region(grid, middle_third(rows), middle_third(cols))
}
