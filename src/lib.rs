//! Core library for Conway's Game of Life on a toroidal grid.

pub mod engine;
pub mod error;

pub use engine::{Cell, TorusGrid, next_state};
pub use error::GridError;
