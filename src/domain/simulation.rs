//! Double-buffered simulation engine.
//!
//! The engine owns two grids of identical size. Each generation is computed
//! from `current` into `next`, then the two are swapped, so no cell ever sees
//! a neighbor value from the generation being built.

use super::{Cell, ConfigError, Grid};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation with every cell unborn at generation 0
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }

        Ok(Self {
            current: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
            generation: 0,
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.current.get(row, col)
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Mark a cell alive. Coordinates outside the grid are ignored, since
    /// pointer positions near the control panel legitimately map off-grid.
    pub fn set_alive(&mut self, row: i64, col: i64) {
        let (rows, cols) = self.dimensions();
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if row >= rows || col >= cols {
            return;
        }

        if let Some(cell) = self.current.get(row, col) {
            self.current.set(row, col, cell.revived());
        }
    }

    /// Advance exactly one generation over the whole torus
    pub fn advance(&mut self) {
        self.current.evolve_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Return to the freshly constructed state, keeping the same dimensions
    pub fn reset(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeState, presets};

    fn alive_set(sim: &Simulation) -> Vec<(usize, usize)> {
        sim.grid()
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    fn with_alive(rows: usize, cols: usize, cells: &[(i64, i64)]) -> Simulation {
        let mut sim = Simulation::new(rows, cols).unwrap();
        for &(r, c) in cells {
            sim.set_alive(r, c);
        }
        sim
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            Simulation::new(0, 5),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 5 })
        );
        assert!(Simulation::new(5, 0).is_err());
        assert!(Simulation::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_is_unborn_generation_zero() {
        let sim = Simulation::new(4, 7).unwrap();
        assert_eq!(sim.dimensions(), (4, 7));
        assert_eq!(sim.generation(), 0);
        assert!(sim.grid().iter_cells().all(|(_, _, c)| c == Cell::UNBORN));
    }

    #[test]
    fn test_set_alive_out_of_bounds_is_noop() {
        let mut sim = Simulation::new(4, 4).unwrap();
        let before = sim.clone();
        for (r, c) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i64::MAX, 2), (i64::MIN, i64::MIN)] {
            sim.set_alive(r, c);
        }
        assert_eq!(sim, before);
    }

    #[test]
    fn test_set_alive_keeps_dead_streak() {
        let mut sim = with_alive(5, 5, &[(2, 2)]);
        sim.advance();
        sim.advance();
        assert_eq!(sim.cell(2, 2), Some(Cell { state: LifeState::Dead, dead_streak: 2 }));
        sim.set_alive(2, 2);
        assert_eq!(sim.cell(2, 2), Some(Cell { state: LifeState::Alive, dead_streak: 2 }));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut a = Simulation::new(12, 12).unwrap();
        presets::r_pentomino().stamp(&mut a, 4, 4);
        let mut b = a.clone();
        for _ in 0..20 {
            a.advance();
            b.advance();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_generation_counts_and_reset() {
        let mut sim = with_alive(6, 6, &[(1, 1), (1, 2), (1, 3)]);
        for _ in 0..7 {
            sim.advance();
        }
        assert_eq!(sim.generation(), 7);
        sim.reset();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim, Simulation::new(6, 6).unwrap());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = with_alive(6, 6, &[(2, 2), (2, 3), (3, 2)]);
        sim.advance();
        sim.reset();
        let once = sim.clone();
        sim.reset();
        assert_eq!(sim, once);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut sim = with_alive(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let before = alive_set(&sim);
        sim.advance();
        assert_eq!(alive_set(&sim), before);
        // Surrounding ring never came alive, so it stays unborn
        assert_eq!(sim.cell(1, 1), Some(Cell::UNBORN));
        assert_eq!(sim.cell(4, 4), Some(Cell::UNBORN));
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut sim = with_alive(7, 7, &[(3, 2), (3, 3), (3, 4)]);
        sim.advance();
        assert_eq!(alive_set(&sim), vec![(2, 3), (3, 3), (4, 3)]);
        sim.advance();
        assert_eq!(alive_set(&sim), vec![(3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_glider_shifts_whole_pattern() {
        // A sequential in-place update would smear the glider instead of moving it
        let mut sim = Simulation::new(10, 10).unwrap();
        presets::glider().stamp(&mut sim, 1, 1);
        let start = alive_set(&sim);
        for _ in 0..4 {
            sim.advance();
        }
        let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(alive_set(&sim), shifted);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let mut sim = Simulation::new(8, 8).unwrap();
        presets::glider().stamp(&mut sim, 0, 0);
        let start = alive_set(&sim);
        // Moves one cell diagonally every 4 generations; 32 brings it home
        for _ in 0..32 {
            sim.advance();
        }
        assert_eq!(alive_set(&sim), start);
        assert_eq!(sim.generation(), 32);
    }

    #[test]
    fn test_birth_across_corner_wrap() {
        // Three live cells only meet (0, 0) through the wrap
        let mut sim = with_alive(6, 6, &[(5, 5), (5, 0), (0, 5)]);
        sim.advance();
        assert!(sim.cell(0, 0).unwrap().is_alive());

        // Two are not enough
        let mut sim = with_alive(6, 6, &[(5, 5), (0, 5)]);
        sim.advance();
        assert!(!sim.cell(0, 0).unwrap().is_alive());
    }

    #[test]
    fn test_dead_streak_bookkeeping() {
        let mut sim = with_alive(5, 5, &[(2, 2)]);
        sim.advance();
        assert_eq!(sim.cell(2, 2), Some(Cell { state: LifeState::Dead, dead_streak: 1 }));

        for k in 1..=5 {
            sim.advance();
            assert_eq!(sim.cell(2, 2).unwrap().dead_streak, k + 1);
        }

        // Three neighbors bring it back and clear the streak
        for (r, c) in [(1, 1), (1, 2), (1, 3)] {
            sim.set_alive(r, c);
        }
        sim.advance();
        assert_eq!(sim.cell(2, 2), Some(Cell { state: LifeState::Alive, dead_streak: 0 }));

        // A far cell that never lived stays pristine
        assert_eq!(sim.cell(4, 0), Some(Cell::UNBORN));
    }
}
