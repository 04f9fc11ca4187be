use crate::domain::ConfigError;

/// Startup configuration. The grid size is derived from the world and tile
/// sizes and stays fixed for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub world_width: u32,
    pub world_height: u32,
    pub tile_size: u32,
    pub frames_per_generation: u32,
    pub target_fps: u32,
    /// Chance that a cell starts alive when randomizing
    pub random_density: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: 1000,
            world_height: 600,
            tile_size: 25,
            frames_per_generation: 10,
            target_fps: 60,
            random_density: 0.3,
        }
    }
}

impl Settings {
    /// Grid dimensions as (rows, cols)
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }

        let rows = (self.world_height / self.tile_size) as usize;
        let cols = (self.world_width / self.tile_size) as usize;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::WorldTooSmall {
                world_width: self.world_width,
                world_height: self.world_height,
                tile_size: self.tile_size,
            });
        }

        Ok((rows, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_24_by_40() {
        assert_eq!(Settings::default().grid_dimensions(), Ok((24, 40)));
    }

    #[test]
    fn test_partial_tiles_are_dropped() {
        let settings = Settings { world_width: 110, world_height: 49, tile_size: 25, ..Settings::default() };
        assert_eq!(settings.grid_dimensions(), Ok((1, 4)));
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let settings = Settings { tile_size: 0, ..Settings::default() };
        assert_eq!(settings.grid_dimensions(), Err(ConfigError::InvalidTileSize));
    }

    #[test]
    fn test_world_smaller_than_tile_rejected() {
        let settings = Settings { world_height: 10, ..Settings::default() };
        assert!(matches!(
            settings.grid_dimensions(),
            Err(ConfigError::WorldTooSmall { world_height: 10, .. })
        ));
    }
}
