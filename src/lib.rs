// Domain layer - grid, neighbor counting, rules, census, viewport
pub mod domain;

// Application layer - configuration and the generation driver
pub mod application;

// Infrastructure layer - window rendering and keyboard input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    CellState, Grid, GridError, NeighborCountGrid, Pattern, advance, count_alive,
    count_neighbors, extract_middle_third, presets, seed_bernoulli, step,
};
pub use application::{ConfigError, GenerationReport, Simulation, SimulationConfig};
