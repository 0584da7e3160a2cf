//! Error types for grid construction and coordinate access.

use thiserror::Error;

/// Errors surfaced by [`TorusGrid`](crate::engine::TorusGrid).
///
/// All of these are deterministic caller mistakes. Nothing here is
/// retried or recovered from; a well-formed grid cannot fail while
/// advancing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The seed sequence does not cover the grid exactly.
    #[error("seed has {actual} cells, but a {width}x{height} grid needs {expected}")]
    SeedLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A zero dimension leaves nothing to simulate.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },

    /// A coordinate-addressed read outside the grid.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
