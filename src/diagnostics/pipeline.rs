use super::TimingBreakdown;
use crate::detector::{SampleMethod, ScaleEstimate};
use crate::types::{GridCoordinates, GridResult, GridScale, GridSource};
use serde::Serialize;

/// Result produced by
/// [`PixelGridDetector::process_with_diagnostics`](crate::PixelGridDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: GridResult,
    pub trace: PipelineTrace,
}

/// What each stage of one engine call decided.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Absent when a manual grid size bypassed estimation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimation: Option<EstimationStage>,
    pub refinement: RefinementStage,
    pub postprocess: PostprocessStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub sample_method: SampleMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_grid_size: Option<(u32, u32)>,
}

/// Estimator outputs and the scale the selector settled on.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectral: Option<ScaleEstimate>,
    /// The spectral estimate existed but failed the plausibility gate.
    pub spectral_rejected: bool,
    /// The spectral estimate passed the gate but disagreed with the gradient
    /// estimate, which was used instead. An agreeing gradient estimate only
    /// supplies the integer counts and leaves the source spectral.
    pub spectral_overridden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<ScaleEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<GridSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<GridScale>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementStage {
    pub cell_width: f64,
    pub cell_height: f64,
    pub coordinates: GridCoordinates,
}

/// Boundary edits applied between refinement and sampling, plus the
/// square fix applied after sampling.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostprocessStage {
    pub equalized_x: usize,
    pub equalized_y: usize,
    pub even_trimmed_x: bool,
    pub even_trimmed_y: bool,
    pub x_boundaries: Vec<f64>,
    pub y_boundaries: Vec<f64>,
    pub square_fixed: bool,
}
