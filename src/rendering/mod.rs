use macroquad::prelude::*;

use crate::application::{Camera, ColorMode, Command, GameState};
use crate::domain::{Cell, HeatTier, LifeState, Simulation};
use crate::ui::{Button, Layout, PANEL_MARGIN, PANEL_WIDTH};

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.94, 1.0);
const ALIVE_COLOR: Color = Color::new(0.08, 0.08, 0.10, 1.0);
const DEAD_COLOR: Color = Color::new(0.78, 0.80, 0.86, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.70, 0.70, 0.70, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);

/// Dead-cell color for the heat map, hottest first
pub const fn heat_color(tier: HeatTier) -> Color {
    match tier {
        HeatTier::Fresh => Color::new(0.95, 0.30, 0.15, 1.0),
        HeatTier::Cooling => Color::new(0.97, 0.60, 0.25, 1.0),
        HeatTier::Cold => Color::new(0.98, 0.82, 0.50, 1.0),
        HeatTier::Frozen => Color::new(0.98, 0.92, 0.80, 1.0),
    }
}

/// Fill color for a cell, `None` when it shows the pristine background
pub fn cell_color(cell: Cell, mode: ColorMode) -> Option<Color> {
    match (cell.state, mode) {
        (LifeState::Unborn, _) => None,
        (LifeState::Alive, _) => Some(ALIVE_COLOR),
        (LifeState::Dead, ColorMode::Plain) => Some(DEAD_COLOR),
        (LifeState::Dead, ColorMode::HeatMap) => cell.heat_tier().map(heat_color),
    }
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw cells in layers: dead history first, then live cells on top
pub fn draw_cells(sim: &Simulation, camera: &Camera, layout: &Layout, mode: ColorMode) {
    let size = camera.scaled_tile(layout.tile_size);
    draw_rectangle(0.0, 0.0, layout.grid_width, layout.grid_height, BACKGROUND);

    let visible = |x: f32, y: f32| x < layout.grid_width && y < layout.grid_height;

    for pass in [LifeState::Dead, LifeState::Alive] {
        for (row, col, cell) in sim.grid().iter_cells().filter(|(_, _, c)| c.state == pass) {
            let (x, y) = camera.grid_to_screen(row, col, layout.tile_size);
            if !visible(x, y) {
                continue;
            }
            if let Some(color) = cell_color(cell, mode) {
                // Clip tiles that straddle the panel edge
                let w = size.min(layout.grid_width - x);
                let h = size.min(layout.grid_height - y);
                draw_rectangle(x, y, w, h, color);
            }
        }
    }
}

/// Draw tile boundaries over the grid area covered by cells
pub fn draw_grid_lines(sim: &Simulation, camera: &Camera, layout: &Layout) {
    let size = camera.scaled_tile(layout.tile_size);
    let (rows, cols) = sim.dimensions();
    let right = (cols as f32 * size).min(layout.grid_width);
    let bottom = (rows as f32 * size).min(layout.grid_height);

    for col in 0..=cols {
        let x = col as f32 * size;
        if x > right {
            break;
        }
        draw_line(x, 0.0, x, bottom, 1.0, GRID_LINE_COLOR);
    }
    for row in 0..=rows {
        let y = row as f32 * size;
        if y > bottom {
            break;
        }
        draw_line(0.0, y, right, y, 1.0, GRID_LINE_COLOR);
    }
}

/// Whether a toggle button should be drawn highlighted
fn is_active(state: &GameState, command: Command) -> bool {
    match command {
        Command::RunToggle => state.is_running,
        Command::ToggleGrid => state.show_grid,
        Command::ToggleColorMode => state.color_mode == ColorMode::HeatMap,
        _ => false,
    }
}

/// Draw the control panel with buttons and status text
pub fn draw_controls(
    state: &GameState,
    camera: &Camera,
    layout: &Layout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = layout.panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, layout.window_height(), PANEL_COLOR);

    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, is_active(state, btn.command())));

    let sim = &state.simulation;
    let lines = [
        format!("State: {}", if state.is_running { "RUNNING" } else { "STOPPED" }),
        format!("Generation: {}", sim.generation()),
        format!("Speed: 1 gen / {} frames", state.frames_per_generation),
        format!("Alive: {}", format_number(sim.population())),
        format!("Zoom: {:.1}x", camera.zoom),
        format!("Colors: {}", state.color_mode.name()),
    ];

    let x = px + PANEL_MARGIN;
    let mut y = layout.status_y();
    for line in &lines {
        draw_text(line, x, y, 18.0, WHITE);
        y += 22.0;
    }

    y += 8.0;
    draw_text("Keys 1-9: stamp pattern", x, y, 14.0, GRAY);
    draw_text("Wheel: zoom", x, y + 16.0, 14.0, GRAY);
}
