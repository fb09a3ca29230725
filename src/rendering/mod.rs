use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;

/// Height of the caption strip under the grid
pub const CAPTION_HEIGHT: f32 = 70.0;

/// Which part of the grid is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Full,
    MiddleThird,
}

impl ViewMode {
    pub const fn toggle(self) -> Self {
        match self {
            ViewMode::Full => ViewMode::MiddleThird,
            ViewMode::MiddleThird => ViewMode::Full,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::Full => "Full grid",
            ViewMode::MiddleThird => "Middle third",
        }
    }

    /// Grid to draw for this mode
    pub fn select(self, sim: &Simulation) -> Grid {
        match self {
            ViewMode::Full => sim.grid().clone(),
            ViewMode::MiddleThird => sim.viewport(),
        }
    }
}

/// Square cell size and top-left origin that fit a rows x cols grid
/// centered in the given area. Empty grids get a zero cell size.
pub fn fit_grid(rows: usize, cols: usize, area_width: f32, area_height: f32) -> (f32, f32, f32) {
    if rows == 0 || cols == 0 {
        return (0.0, 0.0, 0.0);
    }
    let cell_size = (area_width / cols as f32).min(area_height / rows as f32);
    let offset_x = (area_width - cell_size * cols as f32) / 2.0;
    let offset_y = (area_height - cell_size * rows as f32) / 2.0;
    (cell_size, offset_x, offset_y)
}

/// Format large numbers with K/M suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Headline above the counters
pub fn title(sim: &Simulation) -> String {
    match sim.generation() {
        0 => format!("Initial grid ({})", sim.origin()),
        n if sim.is_finished() => format!("Generation {} (finished)", n),
        n => format!("Generation {}", n),
    }
}

/// Draw the grid scaled into the area above the caption strip
pub fn draw_grid(grid: &Grid) {
    let (rows, cols) = grid.dimensions();
    let area_width = screen_width();
    let area_height = screen_height() - CAPTION_HEIGHT;
    let (cell_size, offset_x, offset_y) = fit_grid(rows, cols, area_width, area_height);

    // Colors
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = cell_size >= 6.0;

    draw_rectangle(
        offset_x,
        offset_y,
        cell_size * cols as f32,
        cell_size * rows as f32,
        dead_color,
    );

    for (row, col, cell) in grid.iter_cells() {
        let x = offset_x + col as f32 * cell_size;
        let y = offset_y + row as f32 * cell_size;

        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, alive_color);
        }
        if draw_grid_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
        }
    }
}

/// Draw generation, census and grid size under the grid
pub fn draw_caption(sim: &Simulation, mode: ViewMode) {
    let report = sim.report();
    let top = screen_height() - CAPTION_HEIGHT;

    draw_rectangle(0.0, top, screen_width(), CAPTION_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    let status = if sim.is_running { "Running" } else { "Paused" };
    let labels = [
        (title(sim), 10.0, top + 22.0, 22.0, WHITE),
        (
            format!("Live cells: {}", format_number(report.alive)),
            10.0, top + 44.0, 16.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        (
            format!("Grid size: {}", format_number(report.cell_count)),
            10.0, top + 62.0, 16.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        (
            format!(
                "{} | {} | {:.0} gen/s | step {:.2}ms",
                status,
                mode.name(),
                sim.updates_per_second,
                sim.last_step_ms
            ),
            220.0, top + 44.0, 14.0,
            GRAY,
        ),
        (
            "Space: play  R: reseed  V: viewport  Up/Down: speed  Esc: quit".to_string(),
            220.0, top + 62.0, 14.0,
            GRAY,
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;

    #[test]
    fn test_fit_grid_square_area() {
        let (cell, x, y) = fit_grid(50, 50, 500.0, 500.0);
        assert_eq!((cell, x, y), (10.0, 0.0, 0.0));
    }

    #[test]
    fn test_fit_grid_centers_short_axis() {
        let (cell, x, y) = fit_grid(10, 20, 400.0, 400.0);
        assert_eq!(cell, 20.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, 100.0);
    }

    #[test]
    fn test_fit_grid_empty() {
        assert_eq!(fit_grid(0, 10, 400.0, 400.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_500), "2.5K");
        assert_eq!(format_number(4_000_000), "4.0M");
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::default().toggle(), ViewMode::MiddleThird);
        assert_eq!(ViewMode::MiddleThird.toggle(), ViewMode::Full);
    }

    #[test]
    fn test_title_follows_generation() {
        let config = SimulationConfig::default().with_generations(2);
        let mut sim = Simulation::from_grid(Grid::new(5, 5), &config).unwrap();
        assert_eq!(title(&sim), "Initial grid (custom)");
        sim.advance();
        assert_eq!(title(&sim), "Generation 1");
        sim.advance();
        assert_eq!(title(&sim), "Generation 2 (finished)");

        let sim = Simulation::new(&SimulationConfig::default().with_seed(1)).unwrap();
        assert_eq!(title(&sim), "Initial grid (random)");
    }

    #[test]
    fn test_select_middle_third() {
        let sim = Simulation::from_grid(Grid::new(9, 12), &SimulationConfig::default()).unwrap();
        assert_eq!(ViewMode::Full.select(&sim).dimensions(), (9, 12));
        assert_eq!(ViewMode::MiddleThird.select(&sim).dimensions(), (3, 4));
    }
}
