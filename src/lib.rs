//! # Conway's Game of Life
//!
//! A turn-based Game of Life simulator for the terminal. The board is a
//! finite rectangle with dead cells past every edge; the user steps through
//! generations one `NEXT` command at a time.
//!
//! ## Modules
//!
//! - [`game`] — Core simulation: grid, transition rules, random board setup
//! - [`ui`] — Line-based terminal session: rendering, command loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
