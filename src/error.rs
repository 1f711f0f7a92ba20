//! Errors reported by the spline engine.

use thiserror::Error;

/// The ways a spline request can be rejected.
///
/// Numeric garbage in the control points (NaN, infinities) is not an error;
/// it propagates through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `num_of_segments` was zero.
    #[error("num_of_segments must be at least 1")]
    InvalidSegmentCount,
    /// The custom tension overlay is not aligned with the control points.
    #[error("custom tension overlay has {found} entries, expected one per point ({expected})")]
    TensionCountMismatch { expected: usize, found: usize },
    /// The output would not fit in memory, or its length overflows `usize`.
    #[error("{points} points with {num_of_segments} segments each produce too many samples")]
    TooManySamples { points: usize, num_of_segments: u32 },
    /// A flat coordinate sequence had an odd number of values.
    #[error("odd number of coordinates, the last y is missing")]
    MissingY,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
