pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Camera holds the zoom factor used to scale tiles on screen.
/// The grid is anchored at the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f32,  // 1.0 = one tile per `tile_size` pixels
}

impl Camera {
    pub fn new() -> Self {
        Self { zoom: 1.0 }
    }

    /// Apply mouse wheel movement; steps that would leave the range are ignored
    pub fn scroll(&mut self, wheel: f32) {
        let zoom = self.zoom + wheel.signum() * ZOOM_STEP;
        if wheel != 0.0 && (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            self.zoom = zoom;
        }
    }

    /// On-screen size of one tile
    pub fn scaled_tile(&self, tile_size: f32) -> f32 {
        tile_size * self.zoom
    }

    /// Convert screen coordinates to (row, col), flooring so positions left
    /// of or above the grid become negative rather than snapping to 0.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, tile_size: f32) -> (i64, i64) {
        let scaled = self.scaled_tile(tile_size);
        let col = (screen_x / scaled).floor() as i64;
        let row = (screen_y / scaled).floor() as i64;
        (row, col)
    }

    /// Top-left screen corner of a tile
    pub fn grid_to_screen(&self, row: usize, col: usize, tile_size: f32) -> (f32, f32) {
        let scaled = self.scaled_tile(tile_size);
        (col as f32 * scaled, row as f32 * scaled)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_floors() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_grid(0.0, 0.0, 25.0), (0, 0));
        assert_eq!(camera.screen_to_grid(24.9, 50.0, 25.0), (2, 0));
        assert_eq!(camera.screen_to_grid(-0.5, 10.0, 25.0), (0, -1));
    }

    #[test]
    fn test_screen_to_grid_respects_zoom() {
        let camera = Camera { zoom: 2.0 };
        assert_eq!(camera.screen_to_grid(60.0, 49.0, 25.0), (0, 1));
        assert_eq!(camera.grid_to_screen(1, 2, 25.0), (100.0, 50.0));
    }

    #[test]
    fn test_scroll_stays_in_range() {
        let mut camera = Camera::new();
        for _ in 0..50 {
            camera.scroll(1.0);
        }
        assert!(camera.zoom <= MAX_ZOOM && camera.zoom > MAX_ZOOM - ZOOM_STEP - 1e-4);
        for _ in 0..50 {
            camera.scroll(-1.0);
        }
        assert!(camera.zoom >= MIN_ZOOM && camera.zoom < MIN_ZOOM + ZOOM_STEP + 1e-4);
    }

    #[test]
    fn test_scroll_ignores_still_wheel() {
        let mut camera = Camera::new();
        camera.scroll(0.0);
        assert_eq!(camera.zoom, 1.0);
    }
}
