//! Centred, normalized `1 - log1p(|F|)` spectrum of a zero-padded field.
use crate::image::{GrayImage, ImageView};
use crate::signal::normalize_min_max;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Spectrum of size `w × h`, both powers of two, DC at `(w / 2, h / 2)`.
#[derive(Clone, Debug)]
pub struct MagnitudeSpectrum {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl MagnitudeSpectrum {
    /// Zero-pad `gray` to the next power of two on each axis, run a
    /// row/column 2D FFT, and store the shifted, normalized magnitude map.
    pub fn compute(gray: &GrayImage) -> Self {
        let n = gray.w.next_power_of_two();
        let m = gray.h.next_power_of_two();

        let mut buf = vec![Complex::new(0.0f64, 0.0); m * n];
        for (y, row) in gray.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                buf[y * n + x] = Complex::new(v as f64, 0.0);
            }
        }

        let mut planner = FftPlanner::<f64>::new();
        let row_fft = planner.plan_fft_forward(n);
        for row in buf.chunks_exact_mut(n) {
            row_fft.process(row);
        }

        let col_fft = planner.plan_fft_forward(m);
        let mut column = vec![Complex::new(0.0f64, 0.0); m];
        for x in 0..n {
            for (y, c) in column.iter_mut().enumerate() {
                *c = buf[y * n + x];
            }
            col_fft.process(&mut column);
            for (y, c) in column.iter().enumerate() {
                buf[y * n + x] = *c;
            }
        }

        let (half_m, half_n) = (m / 2, n / 2);
        let mut mag = vec![0.0f32; m * n];
        for y in 0..m {
            let sy = (y + half_m) % m;
            for x in 0..n {
                let sx = (x + half_n) % n;
                mag[sy * n + sx] = (1.0 - buf[y * n + x].norm().ln_1p()) as f32;
            }
        }

        Self {
            w: n,
            h: m,
            data: normalize_min_max(&mag, 0.0, 1.0),
        }
    }

    /// Sum of each spectrum row; indexes vertical frequency.
    pub fn row_projection(&self) -> Vec<f32> {
        self.data
            .chunks_exact(self.w)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Sum of each spectrum column over the rows within `band_half_height` of
    /// the centre row; indexes horizontal frequency.
    pub fn column_projection(&self, band_half_height: usize) -> Vec<f32> {
        let centre = self.h / 2;
        let y0 = centre.saturating_sub(band_half_height);
        let y1 = (centre + band_half_height).min(self.h);
        let mut out = vec![0.0f32; self.w];
        for row in self.data.chunks_exact(self.w).take(y1).skip(y0) {
            for (acc, &v) in out.iter_mut().zip(row) {
                *acc += v;
            }
        }
        out
    }
}
