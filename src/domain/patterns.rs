use super::Simulation;

/// A small shape that can be stamped onto the simulation
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative (x, y) offsets of alive cells
}

impl Pattern {
    /// Build a pattern from ASCII rows, `#` alive and anything else empty.
    pub fn from_rows(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'#')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Self { name, description, width, height: rows.len(), cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Offsets wrap around the torus; every cell goes through `set_alive`.
    pub fn stamp(&self, sim: &mut Simulation, row: usize, col: usize) {
        let (rows, cols) = sim.dimensions();
        for &(dx, dy) in &self.cells {
            let r = (row + dy) % rows;
            let c = (col + dx) % cols;
            sim.set_alive(r as i64, c as i64);
        }
    }

    /// Stamp the pattern centered on (row, col)
    pub fn stamp_centered(&self, sim: &mut Simulation, row: usize, col: usize) {
        let (rows, cols) = sim.dimensions();
        let top = (row + rows - (self.height / 2) % rows) % rows;
        let left = (col + cols - (self.width / 2) % cols) % cols;
        self.stamp(sim, top, left);
    }
}

/// Preset shapes bound to the number keys
pub mod presets {
    use super::Pattern;

    pub fn glider() -> Pattern {
        Pattern::from_rows("Glider", "Spaceship, heads down-right", &[
            ".#.",
            "..#",
            "###",
        ])
    }

    pub fn blinker() -> Pattern {
        Pattern::from_rows("Blinker", "Period 2", &["###"])
    }

    pub fn toad() -> Pattern {
        Pattern::from_rows("Toad", "Period 2", &[
            ".###",
            "###.",
        ])
    }

    pub fn beacon() -> Pattern {
        Pattern::from_rows("Beacon", "Period 2", &[
            "##..",
            "#...",
            "...#",
            "..##",
        ])
    }

    pub fn block() -> Pattern {
        Pattern::from_rows("Block", "Still life", &[
            "##",
            "##",
        ])
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        Pattern::from_rows("LWSS", "Spaceship, heads left", &[
            ".#..#",
            "#....",
            "#...#",
            "####.",
        ])
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::from_rows("R-pentomino", "Settles after 1103 generations", &[
            ".##",
            "##.",
            ".#.",
        ])
    }

    pub fn acorn() -> Pattern {
        Pattern::from_rows("Acorn", "Settles after 5206 generations", &[
            ".#.....",
            "...#...",
            "##..###",
        ])
    }

    pub fn pulsar() -> Pattern {
        Pattern::from_rows("Pulsar", "Period 3", &[
            "..###...###..",
            ".............",
            "#....#.#....#",
            "#....#.#....#",
            "#....#.#....#",
            "..###...###..",
            ".............",
            "..###...###..",
            "#....#.#....#",
            "#....#.#....#",
            "#....#.#....#",
            ".............",
            "..###...###..",
        ])
    }

    /// In number-key order: index 0 is key `1`
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            acorn(),
            pulsar(),
        ]
    }
}
