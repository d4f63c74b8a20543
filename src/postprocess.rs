//! Boundary and output post-processing.
//!
//! Applied in order: [`equalize_square`] (square inputs only), [`align_even`]
//! on each axis, sampling, then [`fix_square`] when enabled.
use crate::types::GridResult;
use log::debug;

fn trim_centered(coords: &mut Vec<f64>, target: usize) -> usize {
    if coords.len() <= target {
        return 0;
    }
    let excess = coords.len() - target;
    let start = excess / 2;
    coords.truncate(start + target);
    coords.drain(..start);
    excess
}

/// Trim the longer boundary list symmetrically until both have the same
/// length. Returns how many entries were removed from `(x, y)`.
pub fn equalize_square(x: &mut Vec<f64>, y: &mut Vec<f64>) -> (usize, usize) {
    if x.len() == y.len() {
        return (0, 0);
    }
    let target = x.len().min(y.len());
    let trimmed = (trim_centered(x, target), trim_centered(y, target));
    debug!(
        "equalize_square trimmed x={} y={} to {} boundaries",
        trimmed.0, trimmed.1, target
    );
    trimmed
}

/// Drop the last boundary when the list spans an odd number of cells.
///
/// A single-cell axis is left alone so the list keeps two entries.
pub fn align_even(coords: &mut Vec<f64>) -> bool {
    let cells = coords.len().saturating_sub(1);
    if cells <= 1 || cells % 2 == 0 {
        return false;
    }
    coords.pop();
    true
}

/// Make a result square when its sides differ by exactly one, dropping the
/// last column or row of the longer side. Returns `None` otherwise.
pub fn fix_square(result: &GridResult) -> Option<GridResult> {
    let (w, h) = (result.width as usize, result.height as usize);
    if w.abs_diff(h) != 1 {
        return None;
    }
    let pixels = if w > h {
        result
            .pixels
            .chunks_exact(w * 3)
            .flat_map(|row| &row[..(w - 1) * 3])
            .copied()
            .collect()
    } else {
        result.pixels[..w * (h - 1) * 3].to_vec()
    };
    let side = w.min(h) as u32;
    debug!("fix_square {}x{} -> {}x{}", w, h, side, side);
    Some(GridResult::new(side, side, pixels))
}
