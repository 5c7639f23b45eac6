use super::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Count live cells in the Moore neighborhood of `(x, y)`, wrapping both
/// axes toroidally. The center cell is excluded, so the result is in 0..=8.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
    let (cols, rows) = (grid.cols(), grid.rows());
    let x1 = if x == 0 { cols - 1 } else { x - 1 };
    let x2 = if x == cols - 1 { 0 } else { x + 1 };
    let y1 = if y == 0 { rows - 1 } else { y - 1 };
    let y2 = if y == rows - 1 { 0 } else { y + 1 };
    grid.get(x1, y1) as usize
        + grid.get(x, y1) as usize
        + grid.get(x2, y1) as usize
        + grid.get(x1, y) as usize
        + grid.get(x2, y) as usize
        + grid.get(x1, y2) as usize
        + grid.get(x, y2) as usize
        + grid.get(x2, y2) as usize
}

/// Computes generation transitions under the classic B3/S23 rule, plus a
/// low-probability "spark" that revives dead cells so the field never
/// settles into permanent extinction.
pub struct LifeEngine {
    spark_chance: f64,
    rng: ChaCha8Rng,
}

impl LifeEngine {
    /// `spark_chance` - per-cell probability that a dead cell ignites
    /// anyway; `0.0` makes `step` fully deterministic.
    /// `seed` - random seed (if `None`, then a random seed is generated)
    pub fn new(spark_chance: f64, seed: Option<u64>) -> Self {
        assert!((0.0..=1.0).contains(&spark_chance));
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self { spark_chance, rng }
    }

    pub fn spark_chance(&self) -> f64 {
        self.spark_chance
    }

    /// Advance the field by one generation.
    ///
    /// The input grid is the immutable snapshot: every neighbor count reads
    /// it and only it, so no cell ever sees a half-updated neighborhood.
    /// The result always has the same dimensions as the input.
    pub fn step(&mut self, grid: &Grid) -> Grid {
        let (cols, rows) = (grid.cols(), grid.rows());
        let mut next = vec![false; cols * rows];
        for y in 0..rows {
            for x in 0..cols {
                let neighbors = count_neighbors(grid, x, y);
                next[x + y * cols] = if grid.get(x, y) {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                        || (self.spark_chance > 0.0 && self.rng.gen_bool(self.spark_chance))
                };
            }
        }
        Grid::from_cells(cols, rows, next)
    }
}
