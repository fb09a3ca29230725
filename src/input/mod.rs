use macroquad::prelude::*;

use crate::application::Simulation;
use crate::rendering::ViewMode;

/// What the window loop should do after input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation, mode: &mut ViewMode) -> (Simulation, Control) {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::R, Simulation::reseed),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Switch between full grid and middle third with 'V'
    if is_key_pressed(KeyCode::V) {
        *mode = mode.toggle();
    }

    let control = if is_key_pressed(KeyCode::Escape) {
        Control::Quit
    } else {
        Control::Continue
    };

    (new_sim, control)
}
