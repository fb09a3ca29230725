use std::fmt;

use rand::SeedableRng;
use rand::distr::Bernoulli;
use rand::rngs::StdRng;

use super::config::{ConfigError, MAX_UPDATES_PER_SECOND, MIN_UPDATES_PER_SECOND, SimulationConfig};
use crate::domain::{
    Grid, count_alive, density_distribution, extract_middle_third, fill_bernoulli, presets, step,
};

/// What a driver shows after each generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: u64,
    pub alive: usize,
    pub cell_count: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {} | Live cells: {} | Grid size: {}",
            self.generation, self.alive, self.cell_count
        )
    }
}

/// Simulation owns the current grid and the generation counter.
/// Each advance replaces the grid with the value `step` returns.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    max_generations: u64,
    seeder: Bernoulli,
    rng: StdRng,
    origin: &'static str, // Where the generation-0 grid came from
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_ms: f32, // Step performance metric
}

impl Simulation {
    /// Build the initial grid from a validated config: the named preset
    /// centered on an empty grid, or a random population otherwise
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let mut sim = Self::from_grid(Grid::new(config.rows, config.cols), config)?;
        match config.pattern.as_deref().and_then(presets::find) {
            Some(pattern) => {
                pattern.place_centered(&mut sim.grid)?;
                sim.origin = pattern.name;
                log::info!("placed {} ({})", pattern.name, pattern.description);
            }
            None => {
                fill_bernoulli(&mut sim.grid, &sim.seeder, &mut sim.rng);
                sim.origin = "random";
                log::info!(
                    "seeded {}x{} grid at density {}",
                    config.rows, config.cols, config.density
                );
            }
        }
        Ok(sim)
    }

    /// Wrap an already populated grid. The grid supplies the shape; the
    /// config supplies the run length, reseed density, seed and speed.
    pub fn from_grid(grid: Grid, config: &SimulationConfig) -> Result<Self, ConfigError> {
        let (rows, cols) = grid.dimensions();
        SimulationConfig { rows, cols, ..config.clone() }.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            grid,
            generation: 0,
            max_generations: config.generations,
            seeder: density_distribution(config.density)?,
            rng,
            origin: "custom",
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            last_step_ms: 0.0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// "random", a preset name, or "custom" for a caller-built grid
    pub const fn origin(&self) -> &'static str {
        self.origin
    }

    pub const fn is_finished(&self) -> bool {
        self.generation >= self.max_generations
    }

    /// Census of the current grid
    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            generation: self.generation,
            alive: count_alive(&self.grid),
            cell_count: self.grid.len(),
        }
    }

    /// Middle third of the current grid, for a zoomed display
    pub fn viewport(&self) -> Grid {
        extract_middle_third(&self.grid)
    }

    /// Compute exactly one generation. Returns None once the run is over.
    pub fn advance(&mut self) -> Option<GenerationReport> {
        if self.is_finished() {
            return None;
        }

        let start = std::time::Instant::now();
        self.grid = step(&self.grid);
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;

        let report = self.report();
        log::debug!("{report}");
        if self.is_finished() {
            log::info!("simulation finished after {} generations", self.generation);
            self.is_running = false;
        }
        Some(report)
    }

    /// Advance by frame time; steps at most once per update interval
    pub fn tick(&mut self, delta_time: f32) -> Option<GenerationReport> {
        if !self.is_running {
            return None;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;
        if self.update_timer < update_interval {
            return None;
        }

        self.update_timer = 0.0;
        self.advance()
    }

    /// Draw a fresh random population and restart the count
    pub fn reseed(mut self) -> Self {
        fill_bernoulli(&mut self.grid, &self.seeder, &mut self.rng);
        self.origin = "random";
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Toggle play/pause state; a finished run stays paused
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running && !self.is_finished();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta)
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_sim(max_generations: u64) -> Simulation {
        let mut grid = Grid::new(7, 7);
        presets::blinker().place_centered(&mut grid).unwrap();
        let config = SimulationConfig::default().with_generations(max_generations);
        Simulation::from_grid(grid, &config).unwrap()
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimulationConfig::default().with_size(20, 30).with_seed(5);
        let mut a = Simulation::new(&config).unwrap();
        let mut b = Simulation::new(&config).unwrap();
        assert_eq!(a.grid(), b.grid());

        for _ in 0..10 {
            assert_eq!(a.advance(), b.advance());
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_size(0, 10);
        assert!(matches!(Simulation::new(&config), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn test_advance_counts_generations() {
        let mut sim = blinker_sim(10);
        let report = sim.advance().unwrap();
        assert_eq!(report, GenerationReport { generation: 1, alive: 3, cell_count: 49 });
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_stops_at_generation_limit() {
        let mut sim = blinker_sim(3).toggle_running();
        assert!(sim.is_running);
        for _ in 0..3 {
            assert!(sim.advance().is_some());
        }
        assert!(sim.is_finished());
        assert!(!sim.is_running);
        assert_eq!(sim.advance(), None);
        assert_eq!(sim.generation(), 3);

        // A finished run cannot be resumed
        let sim = sim.toggle_running();
        assert!(!sim.is_running);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut sim = blinker_sim(100);
        assert_eq!(sim.tick(1.0), None, "paused simulation must not step");

        let mut sim = sim.toggle_running();
        sim.updates_per_second = 10.0;
        assert_eq!(sim.tick(0.05), None);
        assert!(sim.tick(0.06).is_some());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_reseed_resets_generation() {
        let config = SimulationConfig::default().with_seed(11);
        let mut sim = Simulation::new(&config).unwrap();
        sim.advance();
        sim.advance();
        let sim = sim.reseed();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().dimensions(), (50, 50));
    }

    #[test]
    fn test_reseed_draws_from_configured_density() {
        let config = SimulationConfig { density: 1.0, ..SimulationConfig::default() }
            .with_size(6, 8)
            .with_pattern("block")
            .with_generations(5);
        let mut sim = Simulation::new(&config).unwrap();
        assert_eq!(count_alive(sim.grid()), 4);
        assert_eq!(sim.origin(), "Block");
        sim.advance();

        let sim = sim.reseed();
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running);
        assert_eq!(sim.origin(), "random");
        assert_eq!(count_alive(sim.grid()), 48);
    }

    #[test]
    fn test_from_grid_validates_config() {
        let bad_density = SimulationConfig { density: 2.0, ..SimulationConfig::default() };
        assert_eq!(
            Simulation::from_grid(Grid::new(4, 4), &bad_density).err(),
            Some(ConfigError::Density(2.0))
        );
        assert!(matches!(
            Simulation::from_grid(Grid::new(0, 4), &SimulationConfig::default()),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn test_pattern_config_stamps_preset() {
        let config = SimulationConfig::default().with_size(9, 9).with_pattern("Blinker");
        let sim = Simulation::new(&config).unwrap();
        let expected = Grid::from_rows(&[
            ".........",
            ".........",
            ".........",
            ".........",
            "...###...",
            ".........",
            ".........",
            ".........",
            ".........",
        ])
        .unwrap();
        assert_eq!(sim.grid(), &expected);

        let too_small = SimulationConfig::default().with_size(2, 2).with_pattern("glider");
        assert!(matches!(Simulation::new(&too_small), Err(ConfigError::Grid(_))));
    }

    #[test]
    fn test_viewport_is_middle_third() {
        let sim = Simulation::new(&SimulationConfig::default().with_seed(2)).unwrap();
        assert_eq!(sim.viewport().dimensions(), (17, 17));
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = blinker_sim(1).adjust_speed(1000.0);
        assert_eq!(sim.updates_per_second, MAX_UPDATES_PER_SECOND);
        let sim = sim.adjust_speed(-1000.0);
        assert_eq!(sim.updates_per_second, MIN_UPDATES_PER_SECOND);
    }

    #[test]
    fn test_report_display() {
        let report = GenerationReport { generation: 4, alive: 12, cell_count: 2500 };
        assert_eq!(
            report.to_string(),
            "Generation 4 | Live cells: 12 | Grid size: 2500"
        );
    }
}
