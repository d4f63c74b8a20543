use crate::types::GridResult;

/// Nearest-neighbour enlargement by an integer `factor` (values below 1 are
/// treated as 1).
pub fn upscale_nearest(result: &GridResult, factor: u32) -> GridResult {
    let f = factor.max(1) as usize;
    let (w, h) = (result.width as usize, result.height as usize);
    if w == 0 || h == 0 {
        return GridResult::new((w * f) as u32, (h * f) as u32, Vec::new());
    }
    let mut out = Vec::with_capacity(w * f * h * f * 3);
    for row in result.pixels.chunks_exact(w * 3) {
        let mut wide = Vec::with_capacity(w * f * 3);
        for px in row.chunks_exact(3) {
            for _ in 0..f {
                wide.extend_from_slice(px);
            }
        }
        for _ in 0..f {
            out.extend_from_slice(&wide);
        }
    }
    GridResult::new((w * f) as u32, (h * f) as u32, out)
}
