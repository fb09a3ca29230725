use anyhow::Context;
use macroquad::prelude::*;
use bordered_life::{
    Simulation, SimulationConfig,
    input::{self, Control},
    rendering::{self, ViewMode},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 870,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_simulation() -> anyhow::Result<Simulation> {
    let config = SimulationConfig::from_env().context("invalid LIFE_* configuration")?;
    log::info!(
        "starting {}x{} grid, {} generations, density {}",
        config.rows, config.cols, config.generations, config.density
    );
    Simulation::new(&config).context("failed to build the initial grid")
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The initial grid is shown paused; Space starts the run
    let mut sim = match load_simulation() {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("{:#}", err);
            std::process::exit(1);
        }
    };
    let mut mode = ViewMode::default();

    loop {
        let (next, control) = input::process_keyboard_input(sim, &mut mode);
        sim = next;
        if control == Control::Quit {
            break;
        }

        sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&mode.select(&sim));
        rendering::draw_caption(&sim, mode);

        next_frame().await;
    }
}
