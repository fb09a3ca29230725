use thiserror::Error;

use crate::domain::presets;

/// Speed limits shared by validation and the speed keys
pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("density {0} must be between 0.0 and 1.0")]
    Density(f64),
    #[error("speed {0} gen/s must be between 1 and 60")]
    Speed(f32),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },
    #[error(transparent)]
    Grid(#[from] crate::domain::GridError),
}

/// Simulation driver configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Last generation to compute; the run stops after it
    pub generations: u64,
    /// Probability that a seeded cell starts alive
    pub density: f64,
    /// Fixed RNG seed for reproducible runs, OS entropy otherwise
    pub seed: Option<u64>,
    pub updates_per_second: f32,
    /// Preset stamped centered on an empty grid instead of random seeding
    pub pattern: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            generations: 1999,
            density: 0.5,
            seed: None,
            updates_per_second: 30.0,
            pattern: None,
        }
    }
}

impl SimulationConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &'static str,
        ) -> Result<Option<T>, ConfigError> {
            match lookup(key).map(|s| s.trim().to_string()) {
                Some(value) if !value.is_empty() => value
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::Parse { key, value }),
                _ => Ok(None),
            }
        }

        let defaults = Self::default();
        let config = Self {
            rows: parse(&lookup, "LIFE_ROWS")?.unwrap_or(defaults.rows),
            cols: parse(&lookup, "LIFE_COLS")?.unwrap_or(defaults.cols),
            generations: parse(&lookup, "LIFE_GENERATIONS")?.unwrap_or(defaults.generations),
            density: parse(&lookup, "LIFE_DENSITY")?.unwrap_or(defaults.density),
            seed: parse(&lookup, "LIFE_SEED")?.or(defaults.seed),
            updates_per_second: parse(&lookup, "LIFE_SPEED")?
                .unwrap_or(defaults.updates_per_second),
            pattern: parse(&lookup, "LIFE_PATTERN")?.or(defaults.pattern),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if !(MIN_UPDATES_PER_SECOND..=MAX_UPDATES_PER_SECOND).contains(&self.updates_per_second) {
            return Err(ConfigError::Speed(self.updates_per_second));
        }
        if let Some(name) = self.pattern.as_deref().filter(|name| presets::find(name).is_none()) {
            return Err(ConfigError::UnknownPattern(name.to_string()));
        }
        Ok(())
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_generations(mut self, generations: u64) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_pattern(mut self, name: &str) -> Self {
        self.pattern = Some(name.to_string());
        self
    }
}
