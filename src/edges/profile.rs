//! Per-axis gradient energy profiles.
//!
//! The column profile sums `|gx|` down each column and the row profile sums
//! `|gy|` across each row. Accumulation is done in `f64`; on large images the
//! `f32` sums drift enough to move peaks.
use super::grad::{sobel_reflect, Sobel};
use crate::image::{GrayImage, ImageView};
use crate::signal::{plateau_maxima, Peak};

/// Image axis. `X` runs along columns (vertical grid lines), `Y` along rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct EdgeProfile {
    /// One value per column: `Σ_y |gx(x, y)|`.
    pub columns: Vec<f64>,
    /// One value per row: `Σ_x |gy(x, y)|`.
    pub rows: Vec<f64>,
}

impl EdgeProfile {
    pub fn from_gray(gray: &GrayImage) -> Self {
        Self::from_sobel(&sobel_reflect(gray))
    }

    pub fn from_sobel(sobel: &Sobel) -> Self {
        let mut columns = vec![0.0f64; sobel.gx.width()];
        let mut rows = vec![0.0f64; sobel.gy.height()];
        for gx_row in sobel.gx.rows() {
            for (acc, &v) in columns.iter_mut().zip(gx_row) {
                *acc += v.abs() as f64;
            }
        }
        for (acc, gy_row) in rows.iter_mut().zip(sobel.gy.rows()) {
            *acc = gy_row.iter().map(|&v| v.abs() as f64).sum();
        }
        Self { columns, rows }
    }

    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.columns,
            Axis::Y => &self.rows,
        }
    }

    /// Local energy maxima along `axis`, positioned on boundary coordinates.
    ///
    /// A maximum centred on sample `i` marks the boundary at `i + 0.5`: a
    /// clean step between pixels `b - 1` and `b` yields an equal pair of
    /// samples and therefore the boundary `b`.
    pub fn boundary_peaks(&self, axis: Axis) -> Vec<Peak> {
        plateau_maxima(self.axis(axis))
            .into_iter()
            .map(|p| Peak {
                position: p.position + 0.5,
                value: p.value,
            })
            .collect()
    }
}
