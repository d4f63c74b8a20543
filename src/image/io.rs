//! File helpers for the command-line tool.
//!
//! - `load_rgb_image`: decode PNG/JPEG/BMP/WebP into an owned RGB buffer.
//! - `save_rgb_result`: write a [`GridResult`] as PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgb8;
use crate::types::GridResult;
use image::{ImageBuffer, Rgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned, tightly packed RGB image.
#[derive(Clone, Debug)]
pub struct RgbImageBuf {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImageBuf {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow as an engine view.
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width as usize,
            h: self.height as usize,
            data: &self.data,
        }
    }
}

/// Load an image from disk, dropping any alpha channel.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (width, height) = img.dimensions();
    Ok(RgbImageBuf {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Save a restored image as PNG, creating parent directories.
pub fn save_rgb_result(result: &GridResult, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(result.width, result.height, result.pixels.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
