mod config;
mod simulation;

pub use config::{ConfigError, MAX_UPDATES_PER_SECOND, MIN_UPDATES_PER_SECOND, SimulationConfig};
pub use simulation::{GenerationReport, Simulation};
