use rand::{Rng, SeedableRng};

/// Dense rectangular field of cells, row-major, stitched into a torus by
/// the engine's neighbor addressing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead field.
    ///
    /// `cols >= 1`, `rows >= 1`
    pub fn blank(cols: usize, rows: usize) -> Self {
        assert!(cols >= 1 && rows >= 1);
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        }
    }

    /// Create a field with random cells.
    ///
    /// `fill_rate` - probability of a cell being alive
    /// `seed` - random seed (if `None`, then a random seed is generated)
    pub fn random(cols: usize, rows: usize, fill_rate: f64, seed: Option<u64>) -> Self {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::blank(cols, rows);
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        grid
    }

    /// Reassemble a field from raw row-major cells.
    pub fn from_cells(cols: usize, rows: usize, cells: Vec<bool>) -> Self {
        assert!(cols >= 1 && rows >= 1);
        assert_eq!(cells.len(), cols * rows);
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.cols]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.cells[x + y * self.cols] = value;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
