//! Core Game of Life logic: grid representation, the transition rules, and
//! seeded random board setup. Transitions are immutable: each generation is
//! a freshly built grid, never an in-place edit of the old one.

mod grid;
mod rules;
mod setup;

pub use grid::{Cell, Grid, GridError};
pub use rules::{live_neighbors, next_generation};
pub use setup::{random_grid, DEFAULT_SPAWN_RATE};
