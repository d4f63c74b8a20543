//! JSON configuration for the command-line tool.
pub mod resample;

pub use resample::{load_config, OutputConfig, RuntimeConfig};
