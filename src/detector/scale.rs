//! Grid scale selection: plausibility gate on the spectral estimate, gradient
//! fallback and cross-check, and reduction to integer cell counts.
use super::estimate::{estimate_gradient, estimate_spectral, ScaleEstimate};
use super::params::DetectOptions;
use crate::diagnostics::EstimationStage;
use crate::edges::EdgeProfile;
use crate::image::GrayImage;
use crate::types::{GridScale, GridSource};
use log::debug;

/// Largest plausible cell edge in source pixels.
pub const MAX_CELL_SIZE: f64 = 20.0;
/// Largest plausible ratio between the X and Y cell sizes.
pub const MAX_ASPECT_RATIO: f64 = 1.5;
/// Relative cell-count difference above which the two estimators disagree.
pub const AGREEMENT_TOLERANCE: f64 = 0.1;

fn aspect_exceeds(psx: f64, psy: f64) -> bool {
    psx / psy > MAX_ASPECT_RATIO || psy / psx > MAX_ASPECT_RATIO
}

fn sizes_in_range(estimate: &ScaleEstimate, width: usize, height: usize, min_size: f64) -> bool {
    if !(estimate.cells_x > 0.0 && estimate.cells_y > 0.0) {
        return false;
    }
    let (psx, psy) = estimate.pixel_size(width, height);
    psx.min(psy) >= min_size && psx.max(psy) <= MAX_CELL_SIZE
}

fn is_plausible(estimate: &ScaleEstimate, width: usize, height: usize, min_size: f64) -> bool {
    if !sizes_in_range(estimate, width, height, min_size) {
        return false;
    }
    let (psx, psy) = estimate.pixel_size(width, height);
    !aspect_exceeds(psx, psy)
}

fn agrees(spectral: &ScaleEstimate, gradient: &ScaleEstimate) -> bool {
    let close = |a: f64, b: f64| (a - b).abs() <= (AGREEMENT_TOLERANCE * b).max(1.0);
    close(spectral.cells_x, gradient.cells_x) && close(spectral.cells_y, gradient.cells_y)
}

/// Integer cell counts for an accepted estimate.
///
/// Near-square cells share one averaged pixel size. Anisotropic spectral
/// estimates fall back to the smaller size; anisotropic gradient estimates
/// keep their per-axis counts.
pub fn reduce_to_grid(
    estimate: &ScaleEstimate,
    source: GridSource,
    width: usize,
    height: usize,
) -> GridScale {
    let (psx, psy) = estimate.pixel_size(width, height);
    let count = |extent: usize, size: f64| (extent as f64 / size).round().max(1.0) as u32;
    if aspect_exceeds(psx, psy) {
        if source == GridSource::Gradient {
            return GridScale::new(
                estimate.cells_x.round().max(1.0) as u32,
                estimate.cells_y.round().max(1.0) as u32,
            );
        }
        let size = psx.min(psy);
        return GridScale::new(count(width, size), count(height, size));
    }
    let size = (psx + psy) * 0.5;
    GridScale::new(count(width, size), count(height, size))
}

/// Run the estimators and pick the grid scale.
///
/// A plausible spectral estimate is cross-checked against the gradient
/// estimate when the latter has in-range cell sizes. If they agree within
/// [`AGREEMENT_TOLERANCE`] the grid is reported as spectral but takes the
/// gradient's integer counts, which do not suffer from bin quantization of
/// the padded spectrum. If they disagree the gradient estimate wins. Without
/// a usable gradient estimate the spectral one is used as is, and without a
/// plausible spectral estimate the gradient one is the fallback, provided
/// its cell sizes lie in `[min_cell_size, MAX_CELL_SIZE]`.
///
/// The returned stage has `scale == None` when neither produced anything.
pub fn select_scale(
    gray: &GrayImage,
    profile: &EdgeProfile,
    options: &DetectOptions,
) -> EstimationStage {
    let (w, h) = (gray.w, gray.h);
    let min_size = options.min_cell_size as f64;

    let spectral = estimate_spectral(gray, options.peak_width as usize);
    let accepted = spectral.filter(|e| is_plausible(e, w, h, min_size));
    let spectral_rejected = spectral.is_some() && accepted.is_none();
    if let (true, Some(e)) = (spectral_rejected, spectral.as_ref()) {
        let (psx, psy) = e.pixel_size(w, h);
        debug!(
            "select_scale spectral rejected: pixel size ({:.2}, {:.2}) outside [{}, {}] or ratio > {}",
            psx, psy, min_size, MAX_CELL_SIZE, MAX_ASPECT_RATIO
        );
    }

    let min_spacing = options.min_cell_size.max(2) as usize;
    let gradient = estimate_gradient(profile, w, h, min_spacing);

    // `counts` names the estimator whose cell counts are reduced to the grid;
    // `source` is what the grid is reported as coming from.
    let mut spectral_overridden = false;
    let (chosen, counts, source) = match (accepted, gradient) {
        (Some(s), Some(g)) if sizes_in_range(&g, w, h, min_size) => {
            if agrees(&s, &g) {
                debug!(
                    "select_scale spectral ({:.2}, {:.2}) confirmed by gradient ({}, {})",
                    s.cells_x, s.cells_y, g.cells_x, g.cells_y
                );
                (Some(g), GridSource::Gradient, GridSource::Spectral)
            } else {
                debug!(
                    "select_scale spectral ({:.2}, {:.2}) disagrees with gradient ({}, {}), using gradient",
                    s.cells_x, s.cells_y, g.cells_x, g.cells_y
                );
                spectral_overridden = true;
                (Some(g), GridSource::Gradient, GridSource::Gradient)
            }
        }
        (Some(s), _) => (Some(s), GridSource::Spectral, GridSource::Spectral),
        (None, Some(g)) if sizes_in_range(&g, w, h, min_size) => {
            debug!("select_scale falling back to gradient estimator");
            (Some(g), GridSource::Gradient, GridSource::Gradient)
        }
        (None, g) => {
            if let Some(g) = g {
                let (psx, psy) = g.pixel_size(w, h);
                debug!(
                    "select_scale gradient rejected: pixel size ({:.2}, {:.2}) outside [{}, {}]",
                    psx, psy, min_size, MAX_CELL_SIZE
                );
            }
            (None, GridSource::Gradient, GridSource::Gradient)
        }
    };

    let scale = chosen.map(|e| reduce_to_grid(&e, counts, w, h));
    if let Some(s) = scale {
        debug!("select_scale source={:?} cells=({}, {})", source, s.x, s.y);
    }
    EstimationStage {
        spectral,
        spectral_rejected,
        spectral_overridden,
        gradient,
        source: scale.map(|_| source),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausibility_gates_size_and_ratio() {
        let est = |cx, cy| ScaleEstimate {
            cells_x: cx,
            cells_y: cy,
        };
        assert!(is_plausible(&est(16.0, 16.0), 64, 64, 4.0));
        // 2 px cells are below the minimum.
        assert!(!is_plausible(&est(32.0, 32.0), 64, 64, 4.0));
        // 32 px cells are above the maximum.
        assert!(!is_plausible(&est(2.0, 2.0), 64, 64, 4.0));
        // 4 px vs 8 px cells.
        assert!(!is_plausible(&est(16.0, 12.0), 64, 96, 4.0));
        assert!(!is_plausible(&est(0.0, 12.0), 64, 96, 4.0));
    }

    #[test]
    fn agreement_allows_small_spectral_drift() {
        let est = |cx, cy| ScaleEstimate {
            cells_x: cx,
            cells_y: cy,
        };
        assert!(agrees(&est(15.8, 16.1), &est(16.0, 16.0)));
        assert!(agrees(&est(40.0, 40.0), &est(37.0, 43.0)));
        assert!(!agrees(&est(16.0, 16.0), &est(8.0, 8.0)));
        assert!(!agrees(&est(8.0, 12.0), &est(8.0, 8.0)));
    }

    fn blocks(w: usize, h: usize, cell: usize) -> GrayImage {
        let mut img = GrayImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = if (x / cell + y / cell) % 2 == 0 { 30.0 } else { 220.0 };
                img.data[y * w + x] = v;
            }
        }
        img
    }

    #[test]
    fn fallback_gradient_estimate_obeys_the_size_gate() {
        // 24 px cells: eight gradient peaks per axis, but above MAX_CELL_SIZE.
        let img = blocks(192, 192, 24);
        let profile = EdgeProfile::from_gray(&img);
        let stage = select_scale(&img, &profile, &DetectOptions::default());
        assert!(stage.gradient.is_some());
        assert_eq!(stage.scale, None);
        assert_eq!(stage.source, None);
    }

    #[test]
    fn three_pixel_cells_are_not_read_at_double_period() {
        let img = blocks(48, 48, 3);
        let profile = EdgeProfile::from_gray(&img);
        let stage = select_scale(&img, &profile, &DetectOptions::default());
        assert_eq!(stage.scale, None);

        let lowered = DetectOptions::default().with_min_cell_size(3);
        let stage = select_scale(&img, &profile, &lowered);
        assert_eq!(stage.scale, Some(GridScale::new(16, 16)));
    }

    #[test]
    fn near_square_cells_share_the_average_size() {
        let est = ScaleEstimate {
            cells_x: 15.8,
            cells_y: 16.3,
        };
        let scale = reduce_to_grid(&est, GridSource::Spectral, 64, 64);
        assert_eq!(scale, GridScale::new(16, 16));
    }

    #[test]
    fn anisotropic_gradient_estimate_keeps_axes() {
        let est = ScaleEstimate {
            cells_x: 16.0,
            cells_y: 12.0,
        };
        let scale = reduce_to_grid(&est, GridSource::Gradient, 64, 96);
        assert_eq!(scale, GridScale::new(16, 12));
        let spectral = reduce_to_grid(&est, GridSource::Spectral, 64, 96);
        assert_eq!(spectral, GridScale::new(16, 24));
    }
}
