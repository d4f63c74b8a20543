//! 1D signal helpers shared by the estimators and the refiner.

/// Dynamic range below which a signal is treated as constant.
pub const NORMALIZE_EPS: f32 = 1e-8;

/// Map `values` linearly onto `[lo, hi]` using their observed min/max.
///
/// A near-constant input maps to a constant `lo` field.
pub fn normalize_min_max(values: &[f32], lo: f32, hi: f32) -> Vec<f32> {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(mn, mx), &v| {
            (mn.min(v), mx.max(v))
        });
    let range = max - min;
    if values.is_empty() || !(range >= NORMALIZE_EPS) {
        return vec![lo; values.len()];
    }
    let scale = (hi - lo) / range;
    values.iter().map(|&v| lo + (v - min) * scale).collect()
}

/// Gaussian smoothing with an odd kernel of `width` taps (`σ = width / 6`)
/// and clamped borders. Widths below 3 return the input unchanged.
pub fn smooth_gaussian(values: &[f32], width: usize) -> Vec<f32> {
    if width < 3 || values.is_empty() {
        return values.to_vec();
    }
    let k = width | 1;
    let half = k / 2;
    let sigma = k as f32 / 6.0;
    let mut kernel: Vec<f32> = (0..k)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for tap in &mut kernel {
        *tap /= sum + NORMALIZE_EPS;
    }

    let last = values.len() as isize - 1;
    (0..values.len())
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(j, &w)| {
                    let idx = (i as isize + j as isize - half as isize).clamp(0, last);
                    w * values[idx as usize]
                })
                .sum()
        })
        .collect()
}

/// Median of `values` (mean of the two middle entries for even lengths).
/// Sorts the slice in place.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) * 0.5
    } else {
        values[mid]
    })
}

/// Interior local maximum of a sampled signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Sample index, or the midpoint of a flat-topped maximum.
    pub position: f64,
    pub value: f64,
}

/// Strict local maxima of `values`, with flat tops allowed.
///
/// A maximal run of equal samples counts as one maximum when both outer
/// neighbours are strictly lower; its position is the run's midpoint. Runs
/// touching either end of the signal are ignored.
pub fn plateau_maxima(values: &[f64]) -> Vec<Peak> {
    let n = values.len();
    let mut peaks = Vec::new();
    if n < 3 {
        return peaks;
    }
    let mut i = 1;
    while i < n - 1 {
        let v = values[i];
        if v <= values[i - 1] {
            i += 1;
            continue;
        }
        let mut end = i;
        while end + 1 < n && values[end + 1] == v {
            end += 1;
        }
        if end + 1 < n && values[end + 1] < v {
            peaks.push(Peak {
                position: (i + end) as f64 * 0.5,
                value: v,
            });
        }
        i = end + 1;
    }
    peaks
}
