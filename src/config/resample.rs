use crate::detector::DetectOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Tool configuration: input image, engine options and output paths.
#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub options: DetectOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Restored image, one pixel per cell (PNG).
    pub image: PathBuf,
    /// Optional nearest-neighbour enlargement of the restored image.
    #[serde(default)]
    pub preview: Option<PathBuf>,
    #[serde(default = "default_preview_scale")]
    pub preview_scale: u32,
    /// Optional JSON diagnostics report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_preview_scale() -> u32 {
    8
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::SampleMethod;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "a.png", "output": { "image": "b.png" } }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.png"));
        assert_eq!(cfg.options, DetectOptions::default());
        assert_eq!(cfg.output.preview_scale, 8);
        assert!(cfg.output.preview.is_none());
    }

    #[test]
    fn options_block_overrides_selected_fields() {
        let cfg = parse_config(
            r#"{
                "input": "a.png",
                "options": { "sample_method": "median", "fix_square": false },
                "output": { "image": "b.png", "report_json": "r.json", "preview_scale": 4 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.options.sample_method, SampleMethod::Median);
        assert!(!cfg.options.fix_square);
        assert_eq!(cfg.options.peak_width, 6);
        assert_eq!(cfg.output.preview_scale, 4);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "input": "a.png" }"#).is_err());
    }
}
