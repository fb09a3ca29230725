use super::{CellState, Grid, GridError};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, height, width, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    ///
    /// The whole footprint is checked first, so a pattern that would spill
    /// off the grid leaves it untouched.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<(), GridError> {
        let (rows, cols) = grid.dimensions();
        if let Some(&(dr, dc)) = self
            .cells
            .iter()
            .find(|&&(dr, dc)| row + dr >= rows || col + dc >= cols)
        {
            return Err(GridError::IndexOutOfBounds {
                row: row + dr,
                col: col + dc,
                rows,
                cols,
            });
        }

        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, CellState::Alive)?;
        }
        Ok(())
    }

    /// Place pattern centered on the grid
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(self.height) / 2;
        let col = cols.saturating_sub(self.width) / 2;
        self.place_on(grid, row, col)
    }
}

/// Classic still lifes, oscillators and spaceships
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
    }
}
