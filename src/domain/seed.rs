//! Random initial population.
//!
//! Every cell, border included, is drawn independently from a Bernoulli
//! distribution. The border keeps whatever it gets here for the whole run.

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use super::{CellState, Grid, GridError};

/// Validated per-cell distribution for a live-cell probability.
pub fn density_distribution(density: f64) -> Result<Bernoulli, GridError> {
    Bernoulli::new(density).map_err(|_| GridError::InvalidDensity(density))
}

/// Redraw every cell from an already validated distribution
pub fn fill_bernoulli<R: Rng + ?Sized>(grid: &mut Grid, dist: &Bernoulli, rng: &mut R) {
    for cell in grid.cells_mut() {
        *cell = CellState::from(dist.sample(&mut *rng));
    }
}

/// Fill the grid so each cell is alive with probability `density`.
///
/// An out-of-range density leaves the grid untouched.
pub fn seed_bernoulli<R: Rng + ?Sized>(
    grid: &mut Grid,
    density: f64,
    rng: &mut R,
) -> Result<(), GridError> {
    let dist = density_distribution(density)?;
    fill_bernoulli(grid, &dist, rng);

    let (rows, cols) = grid.dimensions();
    log::info!("seeded {rows}x{cols} grid at density {density}");
    Ok(())
}

/// Allocate and seed a grid in one go
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let mut grid = Grid::new(rows, cols);
    seed_bernoulli(&mut grid, density, rng)?;
    Ok(grid)
}
