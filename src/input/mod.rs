use macroquad::prelude::*;

use crate::application::{Camera, Command, GameState};
use crate::domain::{Simulation, presets};
use crate::ui::{Button, Layout};

/// Keyboard shortcuts for panel commands
const KEY_COMMANDS: [(KeyCode, Command); 9] = [
    (KeyCode::Space, Command::RunToggle),
    (KeyCode::F1, Command::RunToggle),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SpeedDown),
    (KeyCode::N, Command::Step),
    (KeyCode::G, Command::ToggleGrid),
    (KeyCode::H, Command::ToggleColorMode),
    (KeyCode::C, Command::Reset),
    (KeyCode::R, Command::Randomize),
];

/// Number keys, in preset order
const PATTERN_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    camera.scroll(mouse_wheel().1);
}

/// Map a pointer position to a grid cell, if it lands on one
pub fn pointer_to_cell(
    sim: &Simulation,
    camera: &Camera,
    layout: &Layout,
    mouse_pos: (f32, f32),
) -> Option<(usize, usize)> {
    if !layout.in_grid_area(mouse_pos) {
        return None;
    }

    let (row, col) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, layout.tile_size);
    let (rows, cols) = sim.dimensions();
    let row = usize::try_from(row).ok().filter(|&r| r < rows)?;
    let col = usize::try_from(col).ok().filter(|&c| c < cols)?;
    Some((row, col))
}

/// Paint cells alive while the left button is held over the grid
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, layout: &Layout, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }

    if let Some((row, col)) = pointer_to_cell(&state.simulation, camera, layout, mouse_pos) {
        state.simulation.set_alive(row as i64, col as i64);
    }
}

/// Stamp a preset centered on the pointer when a number key is pressed
pub fn handle_pattern_keys(state: &mut GameState, camera: &Camera, layout: &Layout, mouse_pos: (f32, f32)) {
    let Some(index) = PATTERN_KEYS.iter().position(|&key| is_key_pressed(key)) else {
        return;
    };
    let Some(pattern) = presets::all_patterns().into_iter().nth(index) else {
        return;
    };

    if let Some((row, col)) = pointer_to_cell(&state.simulation, camera, layout, mouse_pos) {
        log::debug!("stamping {} at ({row}, {col})", pattern.name);
        pattern.stamp_centered(&mut state.simulation, row, col);
    }
}

/// Collect commands from this frame's key presses and button clicks
pub fn pressed_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    let keys = KEY_COMMANDS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command);
    let clicks = buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command);

    keys.chain(clicks).collect()
}
