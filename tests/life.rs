use embers::{count_neighbors, Grid, LifeEngine};

const SEED: u64 = 42;

fn engine_without_spark() -> LifeEngine {
    LifeEngine::new(0.0, Some(SEED))
}

#[test]
fn test_neighbor_count_range() {
    let grid = Grid::random(16, 16, 0.5, Some(SEED));
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let n = count_neighbors(&grid, x, y);
            assert!(n <= 8, "x={} y={} n={}", x, y, n);
        }
    }
}

#[test]
fn test_toroidal_wrap() {
    let mut grid = Grid::blank(3, 3);
    grid.set(0, 0, true);
    // (2, 2) touches (0, 0) diagonally across both seams.
    assert_eq!(count_neighbors(&grid, 2, 2), 1);
    assert_eq!(count_neighbors(&grid, 2, 0), 1);
    assert_eq!(count_neighbors(&grid, 0, 2), 1);
}

/// Build a 5x5 grid with the center cell's state given and exactly `n` of
/// its eight neighbors alive. The pattern stays inside the interior, so
/// wrap-around contributes nothing.
fn center_fixture(center_alive: bool, n: usize) -> Grid {
    const NEIGHBORS: [(usize, usize); 8] = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    let mut grid = Grid::blank(5, 5);
    grid.set(2, 2, center_alive);
    for &(x, y) in NEIGHBORS.iter().take(n) {
        grid.set(x, y, true);
    }
    grid
}

#[test]
fn test_rule_fidelity() {
    let mut engine = engine_without_spark();
    for n in 0..=8 {
        let next = engine.step(&center_fixture(true, n));
        assert_eq!(next.get(2, 2), n == 2 || n == 3, "alive center, n={}", n);

        let next = engine.step(&center_fixture(false, n));
        assert_eq!(next.get(2, 2), n == 3, "dead center, n={}", n);
    }
}

#[test]
fn test_determinism_without_spark() {
    let grid = Grid::random(32, 24, 0.5, Some(SEED));
    let mut engine = engine_without_spark();
    let a = engine.step(&grid);
    let b = engine.step(&grid);
    assert_eq!(a, b);

    // A separately constructed engine agrees as well.
    let c = engine_without_spark().step(&grid);
    assert_eq!(a, c);
}

#[test]
fn test_size_preservation() {
    let mut engine = LifeEngine::new(0.1, Some(SEED));
    for (cols, rows) in [(1, 1), (7, 1), (1, 7), (40, 25)] {
        let grid = Grid::random(cols, rows, 0.5, Some(SEED));
        let next = engine.step(&grid);
        assert_eq!((next.cols(), next.rows()), (cols, rows));
    }
}

#[test]
fn test_extinction_is_stable_without_spark() {
    let mut engine = engine_without_spark();
    let next = engine.step(&Grid::blank(10, 10));
    assert_eq!(next.population(), 0);
}

#[test]
fn test_lone_cell_dies() {
    let mut grid = Grid::blank(5, 5);
    grid.set(2, 2, true);
    let next = engine_without_spark().step(&grid);
    assert_eq!(next.population(), 0);
}

#[test]
fn test_blinker_on_3x3_torus() {
    // Row y=1 fully alive. On a 3-wide torus every live cell sees the other
    // two (count 2) and every dead cell sees the whole row through the
    // column wrap (count 3), so one step fills the entire field.
    let mut grid = Grid::blank(3, 3);
    for x in 0..3 {
        grid.set(x, 1, true);
    }
    let mut engine = engine_without_spark();

    let next = engine.step(&grid);
    assert_eq!(next.cells(), &[true; 9]);

    // And with all nine alive, every cell is overpopulated.
    let next = engine.step(&next);
    assert_eq!(next.population(), 0);
}

#[test]
fn test_spark_bound() {
    const SPARK_CHANCE: f64 = 0.05;
    let mut engine = LifeEngine::new(SPARK_CHANCE, Some(SEED));
    // No births are possible from an empty field, so every live cell in the
    // next generation is a spark.
    let next = engine.step(&Grid::blank(200, 200));
    let fraction = next.population() as f64 / (200. * 200.);
    assert!(
        (fraction - SPARK_CHANCE).abs() < 0.02,
        "fraction={}",
        fraction
    );
}
