/// Everything the control panel and keyboard can ask of the game.
/// Buttons carry one of these; `GameState::apply` is the single dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    RunToggle,
    SpeedUp,
    SpeedDown,
    Step,
    ToggleGrid,
    ToggleColorMode,
    Reset,
    Randomize,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::RunToggle,
        Command::SpeedUp,
        Command::SpeedDown,
        Command::Step,
        Command::ToggleGrid,
        Command::ToggleColorMode,
        Command::Reset,
        Command::Randomize,
    ];

    /// Button caption
    pub const fn label(self) -> &'static str {
        match self {
            Command::RunToggle => "Run/Stop",
            Command::SpeedUp => "Faster",
            Command::SpeedDown => "Slower",
            Command::Step => "Step",
            Command::ToggleGrid => "Grid",
            Command::ToggleColorMode => "Heat map",
            Command::Reset => "Reset",
            Command::Randomize => "Random",
        }
    }
}
