// error.rs - Engine error types

use thiserror::Error;

/// Structural failures of engine operations.
///
/// Each variant is fatal to the call that produced it only; the engine is
/// left exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Construction or reset with a zero width or height.
    #[error("invalid grid dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: u32, height: u32 },

    /// The grid's pixel canvas at this cell size does not fit in `u32`
    /// coordinates.
    #[error("a {width}x{height} grid with cell size {cell_size} exceeds the pixel coordinate range")]
    CanvasTooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    /// A mutation addressed a cell outside the current grid.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
