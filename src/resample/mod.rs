//! Cell samplers: collapse each grid cell to one RGB pixel.
//!
//! All samplers read the caller's buffer through [`ImageRgb8`] and produce a
//! [`GridResult`] of `(len(x) - 1) × (len(y) - 1)` pixels.
//!
//! - [`center`]: the source pixel nearest the cell midpoint.
//! - [`median`]: per-channel median of every pixel in the cell.
//! - [`majority`]: 2-means vote over (sub)sampled cell colours.
//! - [`upscale`]: nearest-neighbour enlargement of a result for previews.

pub mod center;
pub mod majority;
pub mod median;
pub mod upscale;

pub use center::sample_center;
pub use majority::sample_majority;
pub use median::sample_median;
pub use upscale::upscale_nearest;

use crate::detector::SampleMethod;
use crate::image::ImageRgb8;
use crate::types::GridResult;

/// Dispatch to the sampler selected by `method`.
pub fn sample_cells(
    image: &ImageRgb8<'_>,
    x_boundaries: &[f64],
    y_boundaries: &[f64],
    method: SampleMethod,
    seed: u64,
) -> GridResult {
    match method {
        SampleMethod::Center => sample_center(image, x_boundaries, y_boundaries),
        SampleMethod::Median => sample_median(image, x_boundaries, y_boundaries),
        SampleMethod::Majority => sample_majority(image, x_boundaries, y_boundaries, seed),
    }
}

/// Pixel range `[start, end)` covered by the cell between two boundaries.
///
/// Boundaries are rounded and clamped to `[0, extent]`; a collapsed span is
/// widened to one pixel where the image allows, so only a cell pinned to the
/// far edge can come out empty.
pub(crate) fn cell_span(b0: f64, b1: f64, extent: usize) -> (usize, usize) {
    let clamp = |b: f64| (b.round().max(0.0) as usize).min(extent);
    let start = clamp(b0);
    let mut end = clamp(b1);
    if end <= start {
        end = (start + 1).min(extent);
    }
    (start, end)
}

#[inline]
fn cell_counts(x_boundaries: &[f64], y_boundaries: &[f64]) -> (usize, usize) {
    (
        x_boundaries.len().saturating_sub(1),
        y_boundaries.len().saturating_sub(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_round_and_widen() {
        assert_eq!(cell_span(0.0, 8.0, 64), (0, 8));
        assert_eq!(cell_span(7.6, 8.2, 64), (8, 9));
        assert_eq!(cell_span(-3.0, 2.4, 64), (0, 2));
        assert_eq!(cell_span(64.0, 64.0, 64), (64, 64));
    }
}
