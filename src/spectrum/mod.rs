//! Frequency-domain helpers for the spectral grid estimator.
//!
//! A nearest-neighbour upscale by `k` multiplies the spectrum of the logical
//! image by a box response whose zeros fall on every `n = N / k`-th bin.
//! After `1 - log1p(|F|)` those zero lines become the brightest rows and
//! columns of the centred spectrum; the distance between the pair nearest to
//! DC is `2n`, so half of it is the number of logical cells.
//!
//! - [`fft`]: padded 2D magnitude spectrum and its projections.
//! - [`peaks`]: windowed peak detection and the left/right pair search.

pub mod fft;
pub mod peaks;

pub use fft::MagnitudeSpectrum;
pub use peaks::{detect_peak_pair, PeakPairParams};
