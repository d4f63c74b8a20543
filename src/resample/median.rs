use super::{cell_counts, cell_span};
use crate::image::ImageRgb8;
use crate::types::GridResult;

/// Median of sorted bytes, halves rounded up.
fn sorted_median(values: &[u8]) -> u8 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        ((values[mid - 1] as u16 + values[mid] as u16 + 1) / 2) as u8
    } else {
        values[mid]
    }
}

/// Per-channel median of every pixel inside each cell. Empty cells are black.
pub fn sample_median(image: &ImageRgb8<'_>, xs: &[f64], ys: &[f64]) -> GridResult {
    let (nx, ny) = cell_counts(xs, ys);
    let mut out = vec![0u8; nx * ny * 3];
    let mut channels: [Vec<u8>; 3] = Default::default();

    for (j, yw) in ys.windows(2).enumerate() {
        let (y0, y1) = cell_span(yw[0], yw[1], image.h);
        for (i, xw) in xs.windows(2).enumerate() {
            let (x0, x1) = cell_span(xw[0], xw[1], image.w);
            for ch in &mut channels {
                ch.clear();
            }
            for y in y0..y1 {
                let row = &image.row(y)[x0 * 3..x1 * 3];
                for px in row.chunks_exact(3) {
                    for (ch, &v) in channels.iter_mut().zip(px) {
                        ch.push(v);
                    }
                }
            }
            if channels[0].is_empty() {
                continue;
            }
            let dst = (j * nx + i) * 3;
            for (c, ch) in channels.iter_mut().enumerate() {
                ch.sort_unstable();
                out[dst + c] = sorted_median(ch);
            }
        }
    }
    GridResult::new(nx as u32, ny as u32, out)
}
