#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod resample;
pub mod types;

// Stage building blocks, public for tools and tests.
pub mod config;
pub mod edges;
pub mod postprocess;
pub mod signal;
pub mod spectrum;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{
    debug_grid_coords, detect_and_resample, DetectOptions, PixelGridDetector, SampleMethod,
};
pub use crate::error::{Error, Result};
pub use crate::types::{GridCoordinates, GridResult, GridScale, GridSource};

pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use perfect_pixel::prelude::*;
///
/// # fn main() -> perfect_pixel::Result<()> {
/// let (w, h) = (64u32, 64u32);
/// let rgb = vec![0u8; (w * h * 3) as usize];
/// let detector = PixelGridDetector::new(DetectOptions::default().with_manual_grid_size(8, 8));
/// let result = detector.process(ImageRgb8::new(&rgb, w, h)?)?;
/// println!("{}x{}", result.width, result.height);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::{DetectOptions, GridResult, PixelGridDetector, SampleMethod};
}
