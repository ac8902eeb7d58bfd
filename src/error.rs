//! Error type for the tokenizer's entry checks.

use thiserror::Error;

/// Invalid arguments rejected by [`crate::stctok::stctok`] before any byte
/// is read or written.
///
/// Truncation and end of input are not errors; they are reported through
/// [`crate::stctok::Scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StctokError {
    /// The cursor lies past the terminator of the input string.
    #[error("cursor {cursor} is past the end of a {len}-byte input")]
    CursorOutOfBounds { cursor: usize, len: usize },

    /// The token buffer has no room for the terminator.
    #[error("token buffer must hold at least the nul terminator")]
    ZeroCapacity,
}
