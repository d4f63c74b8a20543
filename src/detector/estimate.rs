//! Grid scale estimators.
//!
//! Both return the estimated number of logical cells per axis. The spectral
//! estimate is real-valued; the gradient estimate is already rounded.
use crate::edges::EdgeProfile;
use crate::image::GrayImage;
use crate::signal::{
    median, normalize_min_max, plateau_maxima, smooth_gaussian, Peak, NORMALIZE_EPS,
};
use crate::spectrum::{detect_peak_pair, MagnitudeSpectrum, PeakPairParams};
use log::debug;
use serde::Serialize;

/// Gaussian width applied to both spectral projections.
pub const SPECTRAL_SMOOTH_WIDTH: usize = 17;
/// Gradient peaks below this fraction of the strongest one are ignored.
pub const GRADIENT_REL_THRESHOLD: f64 = 0.2;
/// Fewer gradient peaks than this on either axis means "not gridded".
pub const MIN_GRADIENT_PEAKS: usize = 4;
/// Relative strength above which a maximum skipped for spacing counts as a
/// real grid line.
const DROPPED_PEAK_RATIO: f64 = 0.5;

/// Cells per axis before the scale selector rounds them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEstimate {
    pub cells_x: f64,
    pub cells_y: f64,
}

impl ScaleEstimate {
    /// Implied cell size in source pixels `(x, y)`.
    pub fn pixel_size(&self, width: usize, height: usize) -> (f64, f64) {
        (width as f64 / self.cells_x, height as f64 / self.cells_y)
    }
}

/// FFT-based estimate. `None` for flat input or when either projection lacks
/// a usable peak pair.
pub fn estimate_spectral(gray: &GrayImage, peak_width: usize) -> Option<ScaleEstimate> {
    let (lo, hi) = gray.value_range()?;
    if hi - lo < NORMALIZE_EPS {
        debug!("estimate_spectral flat input, range={:.3e}", hi - lo);
        return None;
    }

    let spectrum = MagnitudeSpectrum::compute(gray);
    let params = PeakPairParams {
        peak_width,
        ..PeakPairParams::default()
    };
    let smoothed = |proj: Vec<f32>| {
        smooth_gaussian(&normalize_min_max(&proj, 0.0, 1.0), SPECTRAL_SMOOTH_WIDTH)
    };

    // The column band covers the whole spectrum height.
    let half_x = detect_peak_pair(&smoothed(spectrum.column_projection(spectrum.h / 2)), params);
    let half_y = detect_peak_pair(&smoothed(spectrum.row_projection()), params);

    match (half_x, half_y) {
        (Some(hx), Some(hy)) if hx > 0.0 && hy > 0.0 => {
            // Peak distances are in padded bins; rescale to the unpadded size.
            let estimate = ScaleEstimate {
                cells_x: hx * gray.w as f64 / spectrum.w as f64,
                cells_y: hy * gray.h as f64 / spectrum.h as f64,
            };
            debug!(
                "estimate_spectral cells=({:.2}, {:.2}) padded={}x{}",
                estimate.cells_x, estimate.cells_y, spectrum.w, spectrum.h
            );
            Some(estimate)
        }
        _ => {
            debug!(
                "estimate_spectral no peak pair (x={:?}, y={:?})",
                half_x, half_y
            );
            None
        }
    }
}

/// Sobel-based estimate: `dimension / median peak interval` per axis.
pub fn estimate_gradient(
    profile: &EdgeProfile,
    width: usize,
    height: usize,
    min_spacing: usize,
) -> Option<ScaleEstimate> {
    let interval_x = median_peak_interval(&profile.columns, min_spacing);
    let interval_y = median_peak_interval(&profile.rows, min_spacing);
    let (Some(ix), Some(iy)) = (interval_x, interval_y) else {
        debug!(
            "estimate_gradient too few peaks (x={:?}, y={:?})",
            interval_x, interval_y
        );
        return None;
    };
    let estimate = ScaleEstimate {
        cells_x: (width as f64 / ix).round().max(1.0),
        cells_y: (height as f64 / iy).round().max(1.0),
    };
    debug!(
        "estimate_gradient intervals=({:.2}, {:.2}) cells=({}, {})",
        ix, iy, estimate.cells_x, estimate.cells_y
    );
    Some(estimate)
}

/// Median spacing of the strong maxima of `signal`.
///
/// Maxima closer than `min_spacing` to the last kept one are skipped. If a
/// skipped maximum is at least half a spacing away and half as strong as the
/// kept one, the true period is shorter than `min_spacing` and the interval
/// is rejected rather than reported at a multiple of the period.
fn median_peak_interval(signal: &[f64], min_spacing: usize) -> Option<f64> {
    let max = signal.iter().copied().fold(0.0f64, f64::max);
    let threshold = max * GRADIENT_REL_THRESHOLD;
    let spacing = min_spacing as f64;
    let mut kept: Vec<Peak> = Vec::new();
    for peak in plateau_maxima(signal) {
        if peak.value < threshold {
            continue;
        }
        match kept.last().copied() {
            Some(last) if peak.position - last.position < spacing => {
                if peak.position - last.position >= spacing * 0.5
                    && peak.value >= last.value * DROPPED_PEAK_RATIO
                {
                    debug!(
                        "median_peak_interval maxima at {} and {} are closer than {}",
                        last.position, peak.position, min_spacing
                    );
                    return None;
                }
            }
            _ => kept.push(peak),
        }
    }
    if kept.len() < MIN_GRADIENT_PEAKS {
        return None;
    }
    let mut intervals: Vec<f64> = kept
        .windows(2)
        .map(|w| w[1].position - w[0].position)
        .collect();
    median(&mut intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(w: usize, h: usize, cell_x: usize, cell_y: usize) -> GrayImage {
        let mut img = GrayImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = if (x / cell_x + y / cell_y) % 2 == 0 { 30.0 } else { 220.0 };
                img.data[y * w + x] = v;
            }
        }
        img
    }

    #[test]
    fn gradient_counts_cells_of_a_checkerboard() {
        let img = blocks(60, 40, 5, 4);
        let profile = EdgeProfile::from_gray(&img);
        let est = estimate_gradient(&profile, 60, 40, 4).unwrap();
        assert_eq!(est.cells_x, 12.0);
        assert_eq!(est.cells_y, 10.0);
    }

    #[test]
    fn gradient_needs_four_peaks() {
        // Three vertical boundaries only.
        let img = blocks(32, 32, 8, 32);
        let profile = EdgeProfile::from_gray(&img);
        assert!(estimate_gradient(&profile, 32, 32, 4).is_none());
    }

    #[test]
    fn cells_finer_than_the_peak_spacing_are_not_halved() {
        // 3 px cells with a 4 px minimum spacing would otherwise read as 6 px.
        let img = blocks(48, 48, 3, 3);
        let profile = EdgeProfile::from_gray(&img);
        assert!(estimate_gradient(&profile, 48, 48, 4).is_none());
        let est = estimate_gradient(&profile, 48, 48, 3).unwrap();
        assert_eq!((est.cells_x, est.cells_y), (16.0, 16.0));
    }

    #[test]
    fn flat_field_has_no_estimate() {
        let mut img = GrayImage::new(32, 32);
        img.data.fill(77.0);
        assert!(estimate_spectral(&img, 6).is_none());
        let profile = EdgeProfile::from_gray(&img);
        assert!(estimate_gradient(&profile, 32, 32, 4).is_none());
    }

    #[test]
    fn spectral_reads_cell_count_of_power_of_two_checkerboard() {
        let img = blocks(64, 64, 4, 4);
        let est = estimate_spectral(&img, 6).unwrap();
        assert!((est.cells_x - 16.0).abs() < 0.5, "cells_x={}", est.cells_x);
        assert!((est.cells_y - 16.0).abs() < 0.5, "cells_y={}", est.cells_y);
    }
}
