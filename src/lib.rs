// Domain layer - simulation engine, no I/O
pub mod domain;

// Application layer - run control, commands, settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, ConfigError, Grid, HeatTier, LifeState, Pattern, Simulation, presets};
pub use application::{Camera, ColorMode, Command, GameState, Settings};
pub use ui::{Button, Layout};
