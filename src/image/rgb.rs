//! Borrowed view over a caller-owned, tightly packed RGB buffer.
//!
//! The engine never mutates or retains the buffer; every stage reads through
//! this view for the duration of one call.
use crate::error::{Error, Result};

/// Row-major RGB samples, 3 bytes per pixel, no row padding.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    pub const CHANNELS: usize = 3;

    /// Wrap `data`, checking that it holds exactly `width × height × 3` bytes.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let (w, h) = (width as usize, height as usize);
        let expected = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or_else(|| {
                Error::InvalidParameter(format!("image size {width}x{height} overflows"))
            })?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let off = (y * self.w + x) * Self::CHANNELS;
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }

    /// Bytes of row `y` (`3 × w` entries).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.w * Self::CHANNELS;
        &self.data[start..start + self.w * Self::CHANNELS]
    }
}
