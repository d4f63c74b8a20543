//! Error type returned by the public entry points.
//!
//! Only caller-visible failures live here. Numerical degeneracies inside the
//! pipeline (flat fields, empty cells) are absorbed where they occur and never
//! surface as errors.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Neither estimator produced a usable grid scale. Recoverable: retry with
    /// an explicit `manual_grid_size`.
    #[error("grid not found; supply a manual grid size to bypass detection")]
    GridNotFound,

    /// An option or argument was rejected before any computation started.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The pixel buffer does not hold `width * height * 3` bytes.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
