use super::Grid;

/// Count live cells over the whole grid, border included.
pub fn count_alive(grid: &Grid) -> usize {
    grid.cells().iter().filter(|cell| cell.is_alive()).count()
}
