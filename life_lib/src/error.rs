//! The errors that board operations can raise.

use crate::Position;

/// An error raised by a [`Grid`] query or mutation.
///
/// Out of range positions are always rejected, never clamped to the nearest
/// valid cell.
///
/// [`Grid`]: crate::Grid
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The given position does not lie on the board.
    #[error("position {position} lies outside of the {width}x{height} board")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// The width of the board that rejected it.
        width: i32,
        /// The height of the board that rejected it.
        height: i32,
    },

    /// A board cannot be created with a non-positive width or height.
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}
