use super::{Cell, Grid};

/// Count the live cells in the 8-connected Moore neighborhood of
/// `(row, col)`. Positions past the board edge count as dead.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let cell = grid.get_or(row as i64 + dr, col as i64 + dc, Cell::Dead);
            if cell.is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Apply one step of Conway's rules to the whole board, returning the
/// successor grid. The input grid is never mutated; every neighbor count
/// is taken against the old generation, so cell order does not matter.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.like(Cell::Dead);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let neighbors = live_neighbors(grid, row, col);
            let current = grid.get_or(row as i64, col as i64, Cell::Dead);
            let successor = match (current, neighbors) {
                (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // survival
                (Cell::Dead, 3) => Cell::Alive,                     // reproduction
                _ => Cell::Dead, // under/overpopulation, or stays dead
            };
            if successor.is_alive() {
                next.set(row, col, Cell::Alive)
                    .expect("successor grid has the same dimensions");
            }
        }
    }
    next
}
