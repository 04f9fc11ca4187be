mod button;

pub use button::Button;

use crate::application::{Command, Settings};

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_MARGIN: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_SPACING: f32 = 8.0;

/// Pixel layout of the window: grid area on the left, control panel on the right.
/// Fixed at startup because the grid never resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub grid_width: f32,
    pub grid_height: f32,
    pub tile_size: f32,
}

impl Layout {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            grid_width: settings.world_width as f32,
            grid_height: settings.world_height as f32,
            tile_size: settings.tile_size as f32,
        }
    }

    pub fn window_width(&self) -> f32 {
        self.grid_width + PANEL_WIDTH
    }

    pub fn window_height(&self) -> f32 {
        self.grid_height
    }

    /// X position where the panel starts
    pub fn panel_x(&self) -> f32 {
        self.grid_width
    }

    /// True for points inside the grid area (not the panel)
    pub fn in_grid_area(&self, point: (f32, f32)) -> bool {
        (0.0..self.grid_width).contains(&point.0) && (0.0..self.grid_height).contains(&point.1)
    }

    /// Buttons stacked top-down in `Command::ALL` order
    pub fn create_buttons(&self) -> Vec<Button> {
        let x = self.panel_x() + PANEL_MARGIN;
        let width = PANEL_WIDTH - 2.0 * PANEL_MARGIN;

        Command::ALL
            .iter()
            .enumerate()
            .map(|(i, &command)| {
                let y = PANEL_MARGIN + i as f32 * (BUTTON_HEIGHT + BUTTON_SPACING);
                Button::new(x, y, width, BUTTON_HEIGHT, command)
            })
            .collect()
    }

    /// Y position below the last button, where status text starts
    pub fn status_y(&self) -> f32 {
        PANEL_MARGIN + Command::ALL.len() as f32 * (BUTTON_HEIGHT + BUTTON_SPACING) + 20.0
    }
}
