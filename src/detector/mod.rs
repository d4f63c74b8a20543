//! Pixel-grid detector.
//!
//! Overview
//! - Converts the RGB input to luma and computes Sobel energy profiles once.
//! - Estimates the number of cells per axis from the FFT magnitude spectrum,
//!   falling back to gradient peak spacing when the spectral answer is
//!   missing or implausible (cells smaller than `min_cell_size`, larger than
//!   20 px, or more than 1.5× apart between axes). A plausible spectral
//!   answer that disagrees with the gradient estimate is replaced by it.
//! - Refines every grid line to the nearest gradient maximum, walking outward
//!   from the image centre.
//! - Equalizes square inputs, enforces even cell counts, samples each cell
//!   and optionally trims a ±1 mismatch to a square result.
//!
//! Modules
//! - [`params`]: [`DetectOptions`] and [`SampleMethod`].
//! - [`estimate`]: spectral and gradient scale estimators.
//! - [`scale`]: plausibility gate and integer cell counts.
//! - [`refine`]: sub-pixel grid line localisation.
//! - `pipeline`: the [`PixelGridDetector`] and the free-function entry points.

pub mod estimate;
pub mod params;
mod pipeline;
pub mod refine;
pub mod scale;

pub use estimate::ScaleEstimate;
pub use params::{DetectOptions, SampleMethod};
pub use pipeline::{debug_grid_coords, detect_and_resample, PixelGridDetector};
