//! Options controlling detection, refinement and sampling.
//!
//! Defaults follow the behaviour most pixel-art sources need: cells of at
//! least 4 px, a 6-sample spectral peak window and a refinement search of a
//! quarter cell on either side of each nominal grid line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest refinement radius, in cells. Wider searches can snap a grid line
/// back onto the previous one and stall the outward walk.
pub const MAX_REFINE_INTENSITY: f32 = 0.5;

/// How each detected cell collapses to one output pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMethod {
    /// Source pixel nearest the cell midpoint.
    #[default]
    Center,
    /// Per-channel median over the cell.
    Median,
    /// Centroid of the larger cluster of a 2-means split of the cell colours.
    Majority,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectOptions {
    pub sample_method: SampleMethod,
    /// Cells per axis `(x, y)`; skips both estimators when set.
    pub manual_grid_size: Option<(u32, u32)>,
    /// Smallest plausible cell edge in source pixels. Also the minimum
    /// spacing between gradient peaks.
    pub min_cell_size: u32,
    /// Half-width of the monotonic window around spectral peaks.
    pub peak_width: u32,
    /// Refinement search radius as a fraction of the nominal cell size.
    pub refine_intensity: f32,
    /// Trim a ±1 width/height mismatch to a square output.
    pub fix_square: bool,
    /// Drop the last boundary on axes with an odd cell count.
    pub even_dimensions: bool,
    /// Seed of the majority sampler's generator.
    pub majority_seed: u64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            sample_method: SampleMethod::Center,
            manual_grid_size: None,
            min_cell_size: 4,
            peak_width: 6,
            refine_intensity: 0.25,
            fix_square: true,
            even_dimensions: true,
            majority_seed: 0,
        }
    }
}

impl DetectOptions {
    pub fn with_sample_method(mut self, method: SampleMethod) -> Self {
        self.sample_method = method;
        self
    }

    pub fn with_manual_grid_size(mut self, cells_x: u32, cells_y: u32) -> Self {
        self.manual_grid_size = Some((cells_x, cells_y));
        self
    }

    pub fn with_min_cell_size(mut self, min_cell_size: u32) -> Self {
        self.min_cell_size = min_cell_size;
        self
    }

    pub fn with_peak_width(mut self, peak_width: u32) -> Self {
        self.peak_width = peak_width;
        self
    }

    pub fn with_refine_intensity(mut self, refine_intensity: f32) -> Self {
        self.refine_intensity = refine_intensity;
        self
    }

    pub fn with_fix_square(mut self, fix_square: bool) -> Self {
        self.fix_square = fix_square;
        self
    }

    pub fn with_even_dimensions(mut self, even_dimensions: bool) -> Self {
        self.even_dimensions = even_dimensions;
        self
    }

    pub fn with_majority_seed(mut self, seed: u64) -> Self {
        self.majority_seed = seed;
        self
    }

    /// Reject option values no computation could honour.
    pub fn validate(&self) -> Result<()> {
        if let Some((gx, gy)) = self.manual_grid_size {
            if gx == 0 || gy == 0 {
                return Err(Error::InvalidParameter(format!(
                    "manual_grid_size must be positive, got ({gx}, {gy})"
                )));
            }
        }
        if self.min_cell_size == 0 {
            return Err(Error::InvalidParameter(
                "min_cell_size must be at least 1".to_string(),
            ));
        }
        if self.peak_width == 0 {
            return Err(Error::InvalidParameter(
                "peak_width must be at least 1".to_string(),
            ));
        }
        if !(0.0..=MAX_REFINE_INTENSITY).contains(&self.refine_intensity) {
            return Err(Error::InvalidParameter(format!(
                "refine_intensity must lie in [0, {MAX_REFINE_INTENSITY}], got {}",
                self.refine_intensity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(DetectOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_manual_grid_is_rejected() {
        let opts = DetectOptions::default().with_manual_grid_size(0, 8);
        assert!(matches!(opts.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn negative_refine_intensity_is_rejected() {
        let opts = DetectOptions {
            refine_intensity: -0.1,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn refine_intensity_above_half_a_cell_is_rejected() {
        let opts = DetectOptions {
            refine_intensity: 0.75,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
        let nan = DetectOptions {
            refine_intensity: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn builders_set_every_field() {
        let opts = DetectOptions::default()
            .with_sample_method(SampleMethod::Median)
            .with_manual_grid_size(12, 9)
            .with_min_cell_size(3)
            .with_peak_width(4)
            .with_refine_intensity(0.4)
            .with_fix_square(false)
            .with_even_dimensions(false)
            .with_majority_seed(99);
        assert_eq!(
            opts,
            DetectOptions {
                sample_method: SampleMethod::Median,
                manual_grid_size: Some((12, 9)),
                min_cell_size: 3,
                peak_width: 4,
                refine_intensity: 0.4,
                fix_square: false,
                even_dimensions: false,
                majority_seed: 99,
            }
        );
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: DetectOptions =
            serde_json::from_str(r#"{ "sample_method": "majority", "manual_grid_size": [16, 8] }"#)
                .unwrap();
        assert_eq!(opts.sample_method, SampleMethod::Majority);
        assert_eq!(opts.manual_grid_size, Some((16, 8)));
        assert_eq!(opts.min_cell_size, 4);
        assert!(opts.fix_square);
    }
}
