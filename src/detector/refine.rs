//! Grid line refinement.
//!
//! Starting from the strongest edge within one cell of the nominal grid line
//! closest to the image centre, the
//! refiner steps outward one nominal cell at a time in both directions and
//! snaps every nominal line to the strongest gradient maximum within
//! `refine_intensity × cell` of it. Lines with no maximum nearby keep their
//! nominal position, so flat regions still get evenly spaced boundaries.
use crate::edges::{Axis, EdgeProfile};
use crate::signal::Peak;
use crate::types::{GridCoordinates, GridScale, GridSource};
use log::debug;

const WALK_EPS: f64 = 1e-9;
/// Boundaries this close to an image edge are pinned to it.
const EDGE_EPS: f64 = 1e-6;

fn snap(peaks: &[Peak], origin: f64, radius: f64) -> f64 {
    peaks
        .iter()
        .filter(|p| (p.position - origin).abs() <= radius)
        .fold(None::<&Peak>, |best, p| match best {
            Some(b) if b.value >= p.value => Some(b),
            _ => Some(p),
        })
        .map_or(origin, |p| p.position)
}

/// Refined boundaries along one axis of length `extent` split into `cells`.
///
/// The result is sorted, strictly increasing, clamped to `[0, extent]` and
/// holds at least two entries.
pub fn refine_axis(peaks: &[Peak], extent: usize, cells: u32, intensity: f64) -> Vec<f64> {
    let extent_f = extent as f64;
    let cell = extent_f / cells.max(1) as f64;
    let radius = cell * intensity;
    let half = cell * 0.5;

    let anchor = (extent_f * 0.5 / cell).round() * cell;
    let start = snap(peaks, anchor, cell);
    let mut coords = Vec::with_capacity(cells as usize + 2);

    let mut x = start;
    while x <= extent_f + half + WALK_EPS {
        x = snap(peaks, x, radius);
        coords.push(x);
        x += cell;
    }
    x = start - cell;
    while x >= -half - WALK_EPS {
        x = snap(peaks, x, radius);
        coords.push(x);
        x -= cell;
    }

    for c in &mut coords {
        *c = if *c < EDGE_EPS {
            0.0
        } else if *c > extent_f - EDGE_EPS {
            extent_f
        } else {
            *c
        };
    }
    coords.sort_by(|a, b| a.total_cmp(b));
    coords.dedup_by(|a, b| (*a - *b).abs() < WALK_EPS);

    if coords.len() < 2 {
        debug!("refine_axis degenerate walk, using nominal boundaries");
        return (0..=cells).map(|i| i as f64 * cell).collect();
    }
    coords
}

/// Refine both axes of `scale` against the gradient energy in `profile`.
pub fn refine_grid(
    profile: &EdgeProfile,
    scale: GridScale,
    source: GridSource,
    refine_intensity: f32,
) -> GridCoordinates {
    let (w, h) = (profile.columns.len(), profile.rows.len());
    let intensity = refine_intensity as f64;
    let x_boundaries = refine_axis(&profile.boundary_peaks(Axis::X), w, scale.x, intensity);
    let y_boundaries = refine_axis(&profile.boundary_peaks(Axis::Y), h, scale.y, intensity);
    debug!(
        "refine_grid cells=({}, {}) boundaries=({}, {})",
        scale.x,
        scale.y,
        x_boundaries.len(),
        y_boundaries.len()
    );
    GridCoordinates {
        scale_x: scale.x,
        scale_y: scale.y,
        x_boundaries,
        y_boundaries,
        source,
    }
}
