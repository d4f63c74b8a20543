//! Peak-pair search on a centred 1D projection.
//!
//! Candidates must fall monotonically for `peak_width - 1` samples on each
//! side and reach `rel_threshold × max`. Each candidate is scored by its
//! prominence: the larger of the climb from the nearest minimum on its left
//! and the fall to the nearest minimum on its right. The best candidate in
//! `(0.25 c, c - min_distance)` and the best in `(c + min_distance, 1.75 c)`
//! form the pair; DC itself is never part of it.

/// Thresholds for [`detect_peak_pair`].
#[derive(Clone, Copy, Debug)]
pub struct PeakPairParams {
    pub peak_width: usize,
    pub rel_threshold: f32,
    pub min_distance: usize,
}

impl Default for PeakPairParams {
    fn default() -> Self {
        Self {
            peak_width: 6,
            rel_threshold: 0.35,
            min_distance: 6,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    index: usize,
    score: f32,
}

fn falls_away(proj: &[f32], i: usize, peak_width: usize) -> bool {
    let n = proj.len();
    for j in 1..peak_width {
        if j > i || i + j >= n {
            continue;
        }
        if proj[i - j + 1] < proj[i - j] || proj[i + j - 1] < proj[i + j] {
            return false;
        }
    }
    true
}

fn prominence(proj: &[f32], i: usize) -> f32 {
    let mut left = 0.0f32;
    let mut k = i;
    while k > 0 && proj[k] > proj[k - 1] {
        left = (proj[i] - proj[k - 1]).abs();
        k -= 1;
    }
    let mut right = 0.0f32;
    k = i;
    while k + 1 < proj.len() && proj[k] > proj[k + 1] {
        right = (proj[i] - proj[k + 1]).abs();
        k += 1;
    }
    left.max(right)
}

/// Half the distance between the most prominent peak left of centre and the
/// most prominent peak right of centre, or `None` when either side is empty.
pub fn detect_peak_pair(proj: &[f32], params: PeakPairParams) -> Option<f64> {
    let n = proj.len();
    if n < 3 {
        return None;
    }
    let max = proj.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !(max >= 1e-6) {
        return None;
    }
    let threshold = max * params.rel_threshold;

    let candidates: Vec<Candidate> = (1..n - 1)
        .filter(|&i| proj[i] >= threshold && falls_away(proj, i, params.peak_width))
        .map(|i| Candidate {
            index: i,
            score: prominence(proj, i),
        })
        .collect();

    let centre = (n / 2) as f64;
    let min_distance = params.min_distance as f64;
    // Ties keep the first candidate in index order.
    let strongest = |lo: f64, hi: f64| {
        candidates
            .iter()
            .filter(|c| (c.index as f64) > lo && (c.index as f64) < hi)
            .fold(None::<Candidate>, |best, c| match best {
                Some(b) if b.score >= c.score => Some(b),
                _ => Some(*c),
            })
    };

    let left = strongest(centre * 0.25, centre - min_distance)?;
    let right = strongest(centre + min_distance, centre * 1.75)?;
    Some((right.index as f64 - left.index as f64).abs() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumps(len: usize, at: &[f32]) -> Vec<f32> {
        (0..len)
            .map(|i| {
                let x = i as f32;
                0.2 + at
                    .iter()
                    .map(|&c| (-(x - c) * (x - c) / 8.0).exp())
                    .sum::<f32>()
            })
            .collect()
    }

    #[test]
    fn symmetric_pair_gives_half_distance() {
        let proj = bumps(64, &[16.0, 48.0]);
        assert_eq!(detect_peak_pair(&proj, PeakPairParams::default()), Some(16.0));
    }

    #[test]
    fn one_sided_signal_has_no_pair() {
        let proj = bumps(64, &[48.0]);
        assert_eq!(detect_peak_pair(&proj, PeakPairParams::default()), None);
    }

    #[test]
    fn peaks_hugging_the_centre_are_excluded() {
        let proj = bumps(64, &[29.0, 35.0]);
        assert_eq!(detect_peak_pair(&proj, PeakPairParams::default()), None);
    }

    #[test]
    fn flat_projection_has_no_pair() {
        assert_eq!(
            detect_peak_pair(&[0.0; 32], PeakPairParams::default()),
            None
        );
    }
}
