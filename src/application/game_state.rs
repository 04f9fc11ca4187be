use log::{debug, info};
use rand::Rng;

use super::{Command, Settings};
use crate::domain::{ConfigError, Simulation};

pub const MIN_FRAMES_PER_GENERATION: u32 = 1;
pub const MAX_FRAMES_PER_GENERATION: u32 = 60;

/// How dead cells are colored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// One color for every previously-alive cell
    #[default]
    Plain,
    /// Fade by how long the cell has been dead
    HeatMap,
}

impl ColorMode {
    pub const fn toggled(self) -> Self {
        match self {
            ColorMode::Plain => ColorMode::HeatMap,
            ColorMode::HeatMap => ColorMode::Plain,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorMode::Plain => "Plain",
            ColorMode::HeatMap => "Heat map",
        }
    }
}

/// GameState orchestrates the simulation.
/// The engine only knows how to advance; running, pacing and display
/// options live here.
pub struct GameState {
    pub simulation: Simulation,
    pub is_running: bool,
    /// One generation every this many running frames
    pub frames_per_generation: u32,
    pub frame_counter: u64,
    pub show_grid: bool,
    pub color_mode: ColorMode,
    pub random_density: f64,
}

impl GameState {
    /// Create new game state from startup settings
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let (rows, cols) = settings.grid_dimensions()?;
        info!("creating {rows}x{cols} simulation");

        Ok(Self {
            simulation: Simulation::new(rows, cols)?,
            is_running: false,
            frames_per_generation: settings
                .frames_per_generation
                .clamp(MIN_FRAMES_PER_GENERATION, MAX_FRAMES_PER_GENERATION),
            frame_counter: 0,
            show_grid: true,
            color_mode: ColorMode::default(),
            random_density: settings.random_density,
        })
    }

    /// Single entry point for buttons and keyboard shortcuts
    pub fn apply(self, command: Command) -> Self {
        debug!("applying {command:?}");
        match command {
            Command::RunToggle => self.toggle_running(),
            Command::SpeedUp => self.adjust_speed(-1),
            Command::SpeedDown => self.adjust_speed(1),
            Command::Step => self.step(),
            Command::ToggleGrid => self.toggle_grid(),
            Command::ToggleColorMode => self.toggle_color_mode(),
            Command::Reset => self.reset(),
            Command::Randomize => self.randomize(),
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Change the frame divisor; a negative delta runs faster
    pub fn adjust_speed(mut self, delta: i32) -> Self {
        self.frames_per_generation = self
            .frames_per_generation
            .saturating_add_signed(delta)
            .clamp(MIN_FRAMES_PER_GENERATION, MAX_FRAMES_PER_GENERATION);
        self
    }

    /// Advance one generation on demand, running or not
    pub fn step(mut self) -> Self {
        self.simulation.advance();
        self
    }

    pub fn toggle_grid(mut self) -> Self {
        self.show_grid = !self.show_grid;
        self
    }

    pub fn toggle_color_mode(mut self) -> Self {
        self.color_mode = self.color_mode.toggled();
        self
    }

    /// Clear the grid, reset the generation counter and stop
    pub fn reset(mut self) -> Self {
        self.simulation.reset();
        self.is_running = false;
        self.frame_counter = 0;
        info!("simulation reset");
        self
    }

    /// Reset, then seed random cells and stop
    pub fn randomize(self) -> Self {
        let mut state = self.reset();
        let density = state.random_density;
        let alive = seed_random(&mut state.simulation, &mut rand::rng(), density);
        info!("seeded {alive} random cells");
        state
    }

    /// Update simulation by one frame.
    /// The frame counter only moves while running; a generation runs each
    /// time it lands on a multiple of `frames_per_generation`.
    pub fn tick(mut self) -> Self {
        if !self.is_running {
            return self;
        }

        self.frame_counter += 1;
        if self.frame_counter % u64::from(self.frames_per_generation) == 0 {
            self.simulation.advance();
        }
        self
    }
}

/// Mark cells alive with the given probability. Returns how many were set.
pub fn seed_random(sim: &mut Simulation, rng: &mut impl Rng, density: f64) -> usize {
    let (rows, cols) = sim.dimensions();
    let density = density.clamp(0.0, 1.0);
    let mut alive = 0;

    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(density) {
                sim.set_alive(row as i64, col as i64);
                alive += 1;
            }
        }
    }
    alive
}
