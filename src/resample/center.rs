use super::cell_counts;
use crate::image::ImageRgb8;
use crate::types::GridResult;

/// Sample the pixel at each cell's midpoint, truncated toward zero and
/// clamped to the image.
pub fn sample_center(image: &ImageRgb8<'_>, xs: &[f64], ys: &[f64]) -> GridResult {
    let (nx, ny) = cell_counts(xs, ys);
    if image.is_empty() {
        return GridResult::new(nx as u32, ny as u32, vec![0; nx * ny * 3]);
    }
    let mut out = Vec::with_capacity(nx * ny * 3);
    let mid = |pair: &[f64], extent: usize| (((pair[0] + pair[1]) * 0.5) as usize).min(extent - 1);
    for yw in ys.windows(2) {
        let cy = mid(yw, image.h);
        for xw in xs.windows(2) {
            out.extend_from_slice(&image.pixel(mid(xw, image.w), cy));
        }
    }
    GridResult::new(nx as u32, ny as u32, out)
}
