//! Performance benchmark for the generation step

use std::time::Instant;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use bordered_life::domain::{Grid, advance, count_alive, count_neighbors, random_grid, step};

/// Average ms per generation for the full step
fn benchmark_step(grid: &Grid, iterations: u32) -> f64 {
    let mut grid = grid.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average ms spent in neighbor counting and rule application separately
fn benchmark_phases(grid: &Grid, iterations: u32) -> anyhow::Result<(f64, f64)> {
    let mut grid = grid.clone();
    let (mut count_ms, mut rule_ms) = (0.0, 0.0);

    for _ in 0..iterations {
        let start = Instant::now();
        let counts = count_neighbors(&grid);
        count_ms += start.elapsed().as_secs_f64() * 1000.0;

        let start = Instant::now();
        grid = advance(&grid, &counts)?;
        rule_ms += start.elapsed().as_secs_f64() * 1000.0;
    }

    Ok((count_ms / iterations as f64, rule_ms / iterations as f64))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5EED);

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>14} {:>10}",
        "Size", "Step ms", "Count ms", "Rule ms", "Cells/sec", "Alive"
    );
    println!("{:-<76}", "");

    for size in sizes {
        let grid = random_grid(size, size, 0.5, &mut rng)
            .with_context(|| format!("seeding {size}x{size} grid"))?;

        let step_ms = benchmark_step(&grid, iterations);
        let (count_ms, rule_ms) = benchmark_phases(&grid, iterations)?;
        let cells_per_sec = (size * size) as f64 / (step_ms / 1000.0);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>13.1}M {:>10}",
            format!("{}x{}", size, size),
            step_ms,
            count_ms,
            rule_ms,
            cells_per_sec / 1_000_000.0,
            count_alive(&grid)
        );
    }

    Ok(())
}
