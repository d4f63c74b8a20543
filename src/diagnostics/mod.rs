//! Diagnostics data model returned alongside the restored image.
//!
//! `DetectionReport` bundles the [`GridResult`](crate::GridResult) with a
//! [`PipelineTrace`] describing what each stage measured and decided. Every
//! type serializes to camelCase JSON for tooling.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    DetectionReport, EstimationStage, InputDescriptor, PipelineTrace, PostprocessStage,
    RefinementStage,
};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
