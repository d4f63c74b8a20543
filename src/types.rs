use serde::{Deserialize, Serialize};

/// Which stage supplied the grid scale used for refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridSource {
    Spectral,
    Gradient,
    Manual,
}

/// Number of logical cells along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridScale {
    pub x: u32,
    pub y: u32,
}

impl GridScale {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Nominal cell size in source pixels for an image of `width × height`.
    pub fn cell_size(&self, width: usize, height: usize) -> (f64, f64) {
        (
            width as f64 / self.x.max(1) as f64,
            height as f64 / self.y.max(1) as f64,
        )
    }
}

/// Refined cell boundaries, as produced before any coordinate post-processing.
///
/// Both boundary lists are strictly increasing, hold at least two entries and
/// lie within `[0, width]` / `[0, height]`.
///
/// `scale_x` / `scale_y` are the cell counts the refiner started from. On
/// non-integer upscales snapping can merge or shift lines, so the refined
/// count is [`cells_x`](Self::cells_x) / [`cells_y`](Self::cells_y), and the
/// restored size additionally depends on post-processing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinates {
    /// Estimated (or manual) cells along X before refinement.
    pub scale_x: u32,
    /// Estimated (or manual) cells along Y before refinement.
    pub scale_y: u32,
    pub x_boundaries: Vec<f64>,
    pub y_boundaries: Vec<f64>,
    pub source: GridSource,
}

impl GridCoordinates {
    pub fn scale(&self) -> GridScale {
        GridScale::new(self.scale_x, self.scale_y)
    }

    /// Cells between the refined X boundaries.
    pub fn cells_x(&self) -> usize {
        self.x_boundaries.len().saturating_sub(1)
    }

    /// Cells between the refined Y boundaries.
    pub fn cells_y(&self) -> usize {
        self.y_boundaries.len().saturating_sub(1)
    }
}

/// Restored image: one RGB triple per logical cell, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridResult {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing)]
    pub pixels: Vec<u8>,
}

impl GridResult {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let off = (y * self.width as usize + x) * 3;
        [self.pixels[off], self.pixels[off + 1], self.pixels[off + 2]]
    }
}
