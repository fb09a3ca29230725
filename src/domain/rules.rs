use super::{CellState, Grid, GridError, NeighborCountGrid, count_neighbors};

/// Trait for the per-cell transition of the automaton
pub trait Rule: Send + Sync {
    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, neighbors: u8) -> CellState;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        current.evolve(neighbors)
    }
}

/// Compute the next generation under Conway's rule.
///
/// `counts` must come from this exact grid; a differently shaped count grid
/// is rejected, a stale one of the right shape is not detected.
pub fn advance(grid: &Grid, counts: &NeighborCountGrid) -> Result<Grid, GridError> {
    advance_with(grid, counts, &ConwayRule)
}

/// Compute the next generation with an arbitrary rule.
pub fn advance_with(
    grid: &Grid,
    counts: &NeighborCountGrid,
    rule: &dyn Rule,
) -> Result<Grid, GridError> {
    if counts.dimensions() != grid.dimensions() {
        return Err(GridError::ShapeMismatch {
            expected: grid.dimensions(),
            actual: counts.dimensions(),
        });
    }

    Ok(evolve_interior(grid, counts, rule))
}

/// Interior cells are evolved into a fresh buffer; border cells are copied
/// as-is, so the outer ring keeps its initial value forever.
fn evolve_interior(grid: &Grid, counts: &NeighborCountGrid, rule: &dyn Rule) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = grid.clone();
    let cells = next.cells_mut();

    for row in 1..rows.saturating_sub(1) {
        for col in 1..cols.saturating_sub(1) {
            let idx = row * cols + col;
            cells[idx] = rule.evolve(cells[idx], counts.at(row, col));
        }
    }

    next
}

/// Advance one generation: `advance(grid, count_neighbors(grid))`.
///
/// Total, since counts derived from the grid always share its shape.
pub fn step(grid: &Grid) -> Grid {
    evolve_interior(grid, &count_neighbors(grid), &ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    /// Dead 5x5 grid with the center cell set and `n` of its neighbors alive
    fn center_with_neighbors(center: CellState, n: usize) -> Grid {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, center).unwrap();
        let ring = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        for &(r, c) in ring.iter().take(n) {
            grid.set(r, c, CellState::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(CellState::Alive, 0), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Alive, 1), CellState::Dead);

        // Survival
        assert_eq!(rule.evolve(CellState::Alive, 2), CellState::Alive);
        assert_eq!(rule.evolve(CellState::Alive, 3), CellState::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(CellState::Alive, 4), CellState::Dead);

        // Reproduction
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Alive);
    }

    #[test]
    fn test_birth_rule() {
        assert_eq!(step(&center_with_neighbors(CellState::Dead, 3)).get(2, 2), Ok(CellState::Alive));
        assert_eq!(step(&center_with_neighbors(CellState::Dead, 2)).get(2, 2), Ok(CellState::Dead));
        assert_eq!(step(&center_with_neighbors(CellState::Dead, 4)).get(2, 2), Ok(CellState::Dead));
    }

    #[test]
    fn test_survival_rule() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { CellState::Alive } else { CellState::Dead };
            let next = step(&center_with_neighbors(CellState::Alive, n));
            assert_eq!(next.get(2, 2), Ok(expected), "{n} neighbors");
        }
    }

    #[test]
    fn test_empty_grid_is_fixed_point() {
        let grid = Grid::new(8, 11);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_dimensions_preserved() {
        for (rows, cols) in [(0, 0), (1, 4), (2, 2), (3, 3), (6, 9)] {
            let grid = Grid::new(rows, cols);
            assert_eq!(step(&grid).dimensions(), (rows, cols));
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6, 6);
        presets::block().place_on(&mut grid, 2, 2).unwrap();
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_rows(&[
            ".....",
            ".....",
            ".###.",
            ".....",
            ".....",
        ])
        .unwrap();
        let vertical = Grid::from_rows(&[
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ])
        .unwrap();

        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn test_border_is_frozen() {
        // A full border would kill or birth cells if it were evaluated.
        let mut grid = Grid::from_rows(&[
            "#######",
            "#.....#",
            "#.##..#",
            "#..#..#",
            "#.....#",
            "#######",
        ])
        .unwrap();
        let original = grid.clone();

        for _ in 0..20 {
            grid = step(&grid);
            for (r, c, state) in original.iter_cells() {
                if original.is_border(r, c) {
                    assert_eq!(grid.get(r, c), Ok(state), "border ({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_dead_border_stays_dead_next_to_births() {
        // Three live interior cells next to the top edge would birth (0, 2)
        // if the border were evaluated.
        let grid = Grid::from_rows(&[".....", ".###.", ".....", "....."]).unwrap();
        let next = step(&grid);
        assert_eq!(next.get(0, 2), Ok(CellState::Dead));
        assert_eq!(next.get(2, 2), Ok(CellState::Alive));
    }

    #[test]
    fn test_advance_rejects_mismatched_counts() {
        let grid = Grid::new(4, 4);
        let counts = count_neighbors(&Grid::new(4, 5));
        assert_eq!(
            advance(&grid, &counts),
            Err(GridError::ShapeMismatch { expected: (4, 4), actual: (4, 5) })
        );
    }

    #[test]
    fn test_advance_does_not_touch_input() {
        let grid = Grid::from_rows(&[".....", ".###.", "....."]).unwrap();
        let before = grid.clone();
        let _ = advance(&grid, &count_neighbors(&grid)).unwrap();
        assert_eq!(grid, before);
    }
}
