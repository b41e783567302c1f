use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, Grid, GridError};

/// Probability that a cell starts alive, unless overridden in the config.
pub const DEFAULT_SPAWN_RATE: f64 = 0.3;

/// Build a board seeded with random live cells.
///
/// One uniform draw per cell in row-major order, alive iff the draw falls
/// below `spawn_rate`. The same `(width, height, seed, spawn_rate)` always
/// produces the same board, so a seed can be replayed.
pub fn random_grid(
    width: usize,
    height: usize,
    seed: u64,
    spawn_rate: f64,
) -> Result<Grid, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height, Cell::Dead)?;
    for row in 0..height {
        for col in 0..width {
            if rng.gen::<f64>() < spawn_rate {
                grid.set(row, col, Cell::Alive)?;
            }
        }
    }
    Ok(grid)
}
