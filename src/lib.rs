mod gui;
mod life;

pub use gui::{App, Config};
pub use life::{count_neighbors, Grid, LifeEngine};
