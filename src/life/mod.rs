mod engine;
mod grid;

pub use engine::{count_neighbors, LifeEngine};
pub use grid::Grid;
