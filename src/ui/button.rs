use macroquad::prelude::*;

use crate::application::Command;

/// Control panel button. Carries the command it triggers instead of a callback.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    command: Command,
    color: Color,
    hover_color: Color,
    active_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, command: Command) -> Self {
        Self {
            x,
            y,
            width,
            height,
            command,
            color: Color::from_rgba(70, 70, 80, 255),
            hover_color: Color::from_rgba(100, 100, 115, 255),
            active_color: Color::from_rgba(60, 140, 90, 255),
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Check if a point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    /// Draw button; `active` highlights toggles that are currently on
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let color = if active {
            self.active_color
        } else if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text = self.command.label();
        let text_size = measure_text(text, None, 20, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
