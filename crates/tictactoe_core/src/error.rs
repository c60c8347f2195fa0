//! Engine error types.

use derive_more::{Display, Error};

/// Error raised by the engine.
///
/// Illegal moves (occupied cell, move after game over) are not errors; they
/// are reported as ignored moves. The only failure is a coordinate that no
/// correctly built presentation layer could produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
