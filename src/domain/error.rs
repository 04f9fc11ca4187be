use thiserror::Error;

/// Configuration problems that prevent a simulation from starting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("tile size must be positive")]
    InvalidTileSize,
    #[error("world {world_width}x{world_height} is smaller than a single {tile_size}px tile")]
    WorldTooSmall {
        world_width: u32,
        world_height: u32,
        tile_size: u32,
    },
}
