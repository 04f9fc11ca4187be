/// Life state of a single cell.
/// `Unborn` and `Dead` are both non-alive; they differ only in history.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LifeState {
    /// Never been alive
    #[default]
    Unborn,
    Alive,
    /// Was alive at some point, currently not
    Dead,
}

/// Dead-streak bucket used by the heat-map coloring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeatTier {
    /// Dead for fewer than 25 generations
    Fresh,
    /// 25..50
    Cooling,
    /// 50..75
    Cold,
    /// 75 or more
    Frozen,
}

impl HeatTier {
    pub const fn from_streak(dead_streak: u32) -> Self {
        match dead_streak {
            0..25 => HeatTier::Fresh,
            25..50 => HeatTier::Cooling,
            50..75 => HeatTier::Cold,
            _ => HeatTier::Frozen,
        }
    }
}

/// Cell represents the fundamental unit of the grid: its life state plus
/// how many consecutive generations it has spent `Dead`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub state: LifeState,
    pub dead_streak: u32,
}

impl Cell {
    pub const UNBORN: Cell = Cell { state: LifeState::Unborn, dead_streak: 0 };

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self.state, LifeState::Alive)
    }

    /// Heat tier for a dead cell, `None` for alive or unborn cells
    pub const fn heat_tier(self) -> Option<HeatTier> {
        match self.state {
            LifeState::Dead => Some(HeatTier::from_streak(self.dead_streak)),
            _ => None,
        }
    }

    /// Mark alive without touching the dead streak (used for painting).
    pub const fn revived(self) -> Self {
        Cell { state: LifeState::Alive, dead_streak: self.dead_streak }
    }

    /// Pure function to compute the next cell from Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Non-live cell with exactly 3 neighbors becomes alive
    /// 3. Live cells otherwise die with a fresh streak of 1
    /// 4. Dead cells stay dead and age, unborn cells stay unborn
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.state, neighbors) {
            (LifeState::Alive, 2 | 3) | (_, 3) => Cell { state: LifeState::Alive, dead_streak: 0 },
            (LifeState::Alive, _) => Cell { state: LifeState::Dead, dead_streak: 1 },
            (LifeState::Dead, _) => Cell {
                state: LifeState::Dead,
                dead_streak: self.dead_streak.saturating_add(1),
            },
            (LifeState::Unborn, _) => Cell::UNBORN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIVE: Cell = Cell { state: LifeState::Alive, dead_streak: 0 };

    fn dead(streak: u32) -> Cell {
        Cell { state: LifeState::Dead, dead_streak: streak }
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(ALIVE.evolve(0), dead(1));
        assert_eq!(ALIVE.evolve(1), dead(1));
    }

    #[test]
    fn test_survival() {
        assert_eq!(ALIVE.evolve(2), ALIVE);
        assert_eq!(ALIVE.evolve(3), ALIVE);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(ALIVE.evolve(4), dead(1));
        assert_eq!(ALIVE.evolve(8), dead(1));
    }

    #[test]
    fn test_reproduction_from_unborn_and_dead() {
        assert_eq!(Cell::UNBORN.evolve(3), ALIVE);
        assert_eq!(dead(40).evolve(3), ALIVE);
    }

    #[test]
    fn test_unborn_never_becomes_dead() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::UNBORN.evolve(n), Cell::UNBORN);
        }
    }

    #[test]
    fn test_dead_streak_ages() {
        assert_eq!(dead(1).evolve(2), dead(2));
        assert_eq!(dead(u32::MAX).evolve(0), dead(u32::MAX));
    }

    #[test]
    fn test_revived_keeps_streak() {
        let cell = dead(7).revived();
        assert!(cell.is_alive());
        assert_eq!(cell.dead_streak, 7);
    }

    #[test]
    fn test_heat_tier_buckets() {
        assert_eq!(HeatTier::from_streak(1), HeatTier::Fresh);
        assert_eq!(HeatTier::from_streak(24), HeatTier::Fresh);
        assert_eq!(HeatTier::from_streak(25), HeatTier::Cooling);
        assert_eq!(HeatTier::from_streak(49), HeatTier::Cooling);
        assert_eq!(HeatTier::from_streak(50), HeatTier::Cold);
        assert_eq!(HeatTier::from_streak(74), HeatTier::Cold);
        assert_eq!(HeatTier::from_streak(75), HeatTier::Frozen);
        assert_eq!(ALIVE.heat_tier(), None);
        assert_eq!(Cell::UNBORN.heat_tier(), None);
        assert_eq!(dead(60).heat_tier(), Some(HeatTier::Cold));
    }
}
