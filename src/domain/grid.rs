use super::Cell;

/// Grid stores the 2D cellular automaton in row-major order.
/// All four edges are joined: neighbor lookups wrap like a torus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells unborn
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::UNBORN; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position, ignoring out-of-range coordinates
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Reset every cell to unborn without reallocating
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::UNBORN);
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let h = self.rows as isize;
        let w = self.cols as isize;

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(h) as usize;
                let c = (col as isize + dc).rem_euclid(w) as usize;
                self.cells[self.get_index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write the next generation of `self` into `next`.
    /// Reads only from `self`, so every cell sees the same previous generation.
    pub(crate) fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.get_index(row, col);
                let neighbors = self.count_live_neighbors(row, col);
                next.cells[idx] = self.cells[idx].evolve(neighbors);
            }
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
