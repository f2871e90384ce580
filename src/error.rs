//! Error type shared by every selection routine in the crate.

use thiserror::Error;

/// Errors produced by the selection algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested rank does not address an element of the input.
    ///
    /// `rank` is reported in the caller's terms: one-based for the whole-slice
    /// entry points, zero-based within the window for [`select_in_range`].
    ///
    /// [`select_in_range`]: crate::sort::select_in_range
    #[error("rank {rank} is out of range for {len} element(s)")]
    OutOfRange { rank: usize, len: usize },
}

impl Error {
    pub fn out_of_range(rank: usize, len: usize) -> Self {
        Error::OutOfRange { rank, len }
    }
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;
