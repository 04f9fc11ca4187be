mod cell;
mod error;
mod grid;
mod patterns;
mod simulation;

pub use cell::{Cell, HeatTier, LifeState};
pub use error::ConfigError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use simulation::Simulation;
