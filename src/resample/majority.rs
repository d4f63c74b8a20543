//! 2-means "dominant colour" sampler.
//!
//! Each cell contributes up to [`MAX_SAMPLES`] colours (every pixel for small
//! cells, uniform random picks otherwise). Two centroids start at the first
//! sample and the sample farthest from it, run [`ITERATIONS`] Lloyd steps,
//! and the centroid of the larger cluster wins; ties go to the second one.
//! The generator is seeded per call, so output is reproducible.
use super::{cell_counts, cell_span};
use crate::image::ImageRgb8;
use crate::types::GridResult;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const MAX_SAMPLES: usize = 128;
pub const ITERATIONS: usize = 6;

fn rgb(px: [u8; 3]) -> Vector3<f64> {
    Vector3::new(px[0] as f64, px[1] as f64, px[2] as f64)
}

fn dominant_colour(samples: &[Vector3<f64>]) -> Vector3<f64> {
    let mut c0 = samples[0];
    let mut farthest = (0usize, 0.0f64);
    for (idx, s) in samples.iter().enumerate().skip(1) {
        let d = (s - c0).norm_squared();
        if d > farthest.1 {
            farthest = (idx, d);
        }
    }
    let mut c1 = samples[farthest.0];

    let (mut n0, mut n1) = (0usize, 0usize);
    for _ in 0..ITERATIONS {
        let (mut sum0, mut sum1) = (Vector3::<f64>::zeros(), Vector3::<f64>::zeros());
        n0 = 0;
        n1 = 0;
        for s in samples {
            if (s - c1).norm_squared() < (s - c0).norm_squared() {
                sum1 += s;
                n1 += 1;
            } else {
                sum0 += s;
                n0 += 1;
            }
        }
        if n0 > 0 {
            c0 = sum0 / n0 as f64;
        }
        if n1 > 0 {
            c1 = sum1 / n1 as f64;
        }
    }
    if n1 >= n0 {
        c1
    } else {
        c0
    }
}

/// Majority-vote sampling with a generator seeded from `seed`.
pub fn sample_majority(image: &ImageRgb8<'_>, xs: &[f64], ys: &[f64], seed: u64) -> GridResult {
    let (nx, ny) = cell_counts(xs, ys);
    let mut out = vec![0u8; nx * ny * 3];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut samples: Vec<Vector3<f64>> = Vec::with_capacity(MAX_SAMPLES);

    for (j, yw) in ys.windows(2).enumerate() {
        let (y0, y1) = cell_span(yw[0], yw[1], image.h);
        for (i, xw) in xs.windows(2).enumerate() {
            let (x0, x1) = cell_span(xw[0], xw[1], image.w);
            let n = (x1 - x0) * (y1 - y0);
            if n == 0 {
                continue;
            }
            samples.clear();
            if n > MAX_SAMPLES {
                for _ in 0..MAX_SAMPLES {
                    let y = rng.gen_range(y0..y1);
                    let x = rng.gen_range(x0..x1);
                    samples.push(rgb(image.pixel(x, y)));
                }
            } else {
                for y in y0..y1 {
                    for x in x0..x1 {
                        samples.push(rgb(image.pixel(x, y)));
                    }
                }
            }
            let winner = dominant_colour(&samples);
            let dst = (j * nx + i) * 3;
            for c in 0..3 {
                out[dst + c] = winner[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    GridResult::new(nx as u32, ny as u32, out)
}
