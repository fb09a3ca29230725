mod cell;
mod census;
mod error;
mod grid;
mod neighbors;
mod patterns;
mod rules;
mod seed;
pub mod viewport;

pub use cell::CellState;
pub use census::count_alive;
pub use error::GridError;
pub use grid::Grid;
pub use neighbors::{NeighborCountGrid, count_neighbors};
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule, advance, advance_with, step};
pub use seed::{density_distribution, fill_bernoulli, random_grid, seed_bernoulli};
pub use viewport::{extract, extract_middle_third};
