mod camera;
mod command;
mod game_state;
mod settings;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use command::Command;
pub use game_state::{
    ColorMode, GameState, MAX_FRAMES_PER_GENERATION, MIN_FRAMES_PER_GENERATION, seed_random,
};
pub use settings::Settings;
