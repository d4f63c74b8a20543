//! Detector pipeline driving grid recovery and resampling end-to-end.
//!
//! Both public entry points share `PixelGridDetector::locate_grid`
//! (validation, estimation, refinement), so the coordinates a caller previews
//! are exactly the ones the sampler consumes.
//!
//! ```no_run
//! use perfect_pixel::{DetectOptions, PixelGridDetector};
//! use perfect_pixel::image::ImageRgb8;
//!
//! # fn example(rgb: &[u8], w: u32, h: u32) -> perfect_pixel::Result<()> {
//! let detector = PixelGridDetector::new(DetectOptions::default());
//! let report = detector.process_with_diagnostics(ImageRgb8::new(rgb, w, h)?)?;
//! println!(
//!     "{}x{} in {:.2} ms",
//!     report.result.width, report.result.height, report.trace.timings.total_ms
//! );
//! # Ok(())
//! # }
//! ```
use super::params::DetectOptions;
use super::refine::refine_grid;
use super::scale::select_scale;
use crate::diagnostics::{
    DetectionReport, EstimationStage, InputDescriptor, PipelineTrace, PostprocessStage,
    RefinementStage, TimingBreakdown,
};
use crate::edges::EdgeProfile;
use crate::error::{Error, Result};
use crate::image::{GrayImage, ImageRgb8};
use crate::postprocess::{align_even, equalize_square, fix_square};
use crate::resample::sample_cells;
use crate::types::{GridCoordinates, GridResult, GridScale, GridSource};
use log::debug;
use std::time::Instant;

/// Grid recovery engine. Stateless apart from its options; safe to share.
#[derive(Clone, Debug, Default)]
pub struct PixelGridDetector {
    options: DetectOptions,
}

struct LocatedGrid {
    coordinates: GridCoordinates,
    estimation: Option<EstimationStage>,
}

impl PixelGridDetector {
    pub fn new(options: DetectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Restore `image` to one pixel per detected cell.
    pub fn process(&self, image: ImageRgb8<'_>) -> Result<GridResult> {
        self.process_with_diagnostics(image).map(|report| report.result)
    }

    /// Refined cell boundaries before any post-processing.
    pub fn grid_coords(&self, image: ImageRgb8<'_>) -> Result<GridCoordinates> {
        let mut timings = TimingBreakdown::default();
        self.locate_grid(&image, &mut timings)
            .map(|located| located.coordinates)
    }

    /// Restore `image` and report what every stage decided.
    pub fn process_with_diagnostics(&self, image: ImageRgb8<'_>) -> Result<DetectionReport> {
        let opts = &self.options;
        debug!(
            "PixelGridDetector::process start w={} h={} method={:?} manual={:?}",
            image.w, image.h, opts.sample_method, opts.manual_grid_size
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let located = self.locate_grid(&image, &mut timings)?;
        let coordinates = located.coordinates;

        let post_start = Instant::now();
        let mut post = PostprocessStage {
            x_boundaries: coordinates.x_boundaries.clone(),
            y_boundaries: coordinates.y_boundaries.clone(),
            ..Default::default()
        };
        if image.w == image.h {
            (post.equalized_x, post.equalized_y) =
                equalize_square(&mut post.x_boundaries, &mut post.y_boundaries);
        }
        if opts.even_dimensions {
            post.even_trimmed_x = align_even(&mut post.x_boundaries);
            post.even_trimmed_y = align_even(&mut post.y_boundaries);
        }
        timings.record("postprocess", post_start);

        let sample_start = Instant::now();
        let mut result = sample_cells(
            &image,
            &post.x_boundaries,
            &post.y_boundaries,
            opts.sample_method,
            opts.majority_seed,
        );
        if opts.fix_square {
            if let Some(squared) = fix_square(&result) {
                result = squared;
                post.square_fixed = true;
            }
        }
        timings.record("sample", sample_start);
        timings.total_ms = crate::diagnostics::elapsed_ms(total_start);

        debug!(
            "PixelGridDetector::process done {}x{} -> {}x{} source={:?} total_ms={:.3}",
            image.w,
            image.h,
            result.width,
            result.height,
            coordinates.source,
            timings.total_ms
        );

        let (cell_width, cell_height) = coordinates.scale().cell_size(image.w, image.h);
        Ok(DetectionReport {
            result,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    sample_method: opts.sample_method,
                    manual_grid_size: opts.manual_grid_size,
                },
                timings,
                estimation: located.estimation,
                refinement: RefinementStage {
                    cell_width,
                    cell_height,
                    coordinates,
                },
                postprocess: post,
            },
        })
    }

    fn locate_grid(
        &self,
        image: &ImageRgb8<'_>,
        timings: &mut TimingBreakdown,
    ) -> Result<LocatedGrid> {
        self.options.validate()?;
        if image.is_empty() {
            debug!("PixelGridDetector::locate_grid zero-area input");
            return Err(Error::GridNotFound);
        }
        if let Some((gx, gy)) = self.options.manual_grid_size {
            if gx as usize > image.w || gy as usize > image.h {
                return Err(Error::InvalidParameter(format!(
                    "manual_grid_size ({gx}, {gy}) exceeds image size {}x{}",
                    image.w, image.h
                )));
            }
        }

        let grad_start = Instant::now();
        let gray = GrayImage::from_rgb(image);
        let profile = EdgeProfile::from_gray(&gray);
        timings.record("gradient", grad_start);

        let (scale, source, estimation) = match self.options.manual_grid_size {
            Some((gx, gy)) => (GridScale::new(gx, gy), GridSource::Manual, None),
            None => {
                let est_start = Instant::now();
                let stage = select_scale(&gray, &profile, &self.options);
                timings.record("estimate", est_start);
                match (stage.scale, stage.source) {
                    (Some(scale), Some(source)) => (scale, source, Some(stage)),
                    _ => {
                        debug!("PixelGridDetector::locate_grid no usable grid scale");
                        return Err(Error::GridNotFound);
                    }
                }
            }
        };

        let refine_start = Instant::now();
        let coordinates = refine_grid(&profile, scale, source, self.options.refine_intensity);
        timings.record("refine", refine_start);

        Ok(LocatedGrid {
            coordinates,
            estimation,
        })
    }
}

/// Detect the pixel grid of `pixels` (`width × height` RGB) and resample it
/// to one pixel per cell.
///
/// Returns [`Error::GridNotFound`] when no grid period can be established;
/// retry with `manual_grid_size` set.
pub fn detect_and_resample(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &DetectOptions,
) -> Result<GridResult> {
    let image = ImageRgb8::new(pixels, width, height)?;
    PixelGridDetector::new(options.clone()).process(image)
}

/// Grid scale and refined boundaries, computed exactly as
/// [`detect_and_resample`] computes them before post-processing.
pub fn debug_grid_coords(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &DetectOptions,
) -> Result<GridCoordinates> {
    let image = ImageRgb8::new(pixels, width, height)?;
    PixelGridDetector::new(options.clone()).grid_coords(image)
}
