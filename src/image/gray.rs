//! Owned single-channel `f32` field in row-major layout.
//!
//! Produced once per call from the RGB input with the Rec. 601 luma weights
//! and shared by the spectral estimator, the gradient estimator and the
//! refiner.
use super::{ImageRgb8, ImageView, ImageViewMut};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[derive(Clone, Debug)]
pub struct GrayImage {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Backing storage, `w * h` values
    pub data: Vec<f32>,
}

impl GrayImage {
    /// Zero-initialized field of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Luma conversion `0.299 R + 0.587 G + 0.114 B`.
    pub fn from_rgb(rgb: &ImageRgb8<'_>) -> Self {
        let data = rgb
            .data
            .chunks_exact(ImageRgb8::CHANNELS)
            .map(|px| LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32)
            .collect();
        Self {
            w: rgb.w,
            h: rgb.h,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    /// `(min, max)` over all samples, `None` for an empty field.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl ImageView for GrayImage {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for GrayImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
