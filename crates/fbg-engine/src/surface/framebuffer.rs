use std::collections::TryReserveError;

use crate::coords::Rect;
use crate::device::{EncodedColor, PixelFormat};
use crate::paint::Color;

/// Offscreen pixel buffer: owned bytes plus the layout that addresses them.
///
/// All access goes through offsets derived from the format and slice
/// operations on the buffer; a write can at worst panic, never land outside.
/// Bulk helpers (`write_span`, `copy_span`, `copy_row`) are what the
/// rasterizer uses for interior fill.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    bytes: Vec<u8>,
    format: PixelFormat,
}

impl Framebuffer {
    /// Allocates a zeroed buffer of `format.size()` bytes, reporting failure
    /// instead of aborting.
    pub fn try_new(format: PixelFormat) -> Result<Self, TryReserveError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(format.size())?;
        bytes.resize(format.size(), 0);
        Ok(Self { bytes, format })
    }

    #[inline]
    pub fn format(&self) -> &PixelFormat {
        &self.format
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.format.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.format.height()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Addressable area as a rect, saturated to `i32`.
    pub fn bounds(&self) -> Rect {
        let w = i32::try_from(self.width()).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height()).unwrap_or(i32::MAX);
        Rect::new(0, 0, w, h)
    }

    /// Converts a signed coordinate to buffer coordinates if it is addressable,
    /// i.e. `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn locate(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width())?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height())?;
        Some((x, y))
    }

    /// Reads back the color stored at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = self.locate(x as i64, y as i64)?;
        let start = self.format.pixel_offset(x, y);
        let px = &self.bytes[start..start + self.format.bytes_per_pixel()];
        Some(EncodedColor::decode(&self.format, px))
    }

    /// Stamps the channel bytes of `color` into pixel `(x, y)`.
    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, color: &EncodedColor) {
        let start = self.format.pixel_offset(x, y);
        let end = start + self.format.bytes_per_pixel();
        color.write_into(&mut self.bytes[start..end]);
    }

    /// Copies pre-encoded pixel bytes into row `y` starting at column `x`.
    #[inline]
    pub(crate) fn write_span(&mut self, x: usize, y: usize, span: &[u8]) {
        let start = self.format.pixel_offset(x, y);
        self.bytes[start..start + span.len()].copy_from_slice(span);
    }

    /// Replicates `pixels` pixels starting at column `x` from row `src_y`
    /// into row `dst_y`.
    #[inline]
    pub(crate) fn copy_span(&mut self, x: usize, src_y: usize, dst_y: usize, pixels: usize) {
        let len = pixels * self.format.bytes_per_pixel();
        let src = self.format.pixel_offset(x, src_y);
        let dst = self.format.pixel_offset(x, dst_y);
        self.bytes.copy_within(src..src + len, dst);
    }

    /// Replicates the whole scanline `src_y`, padding included, into `dst_y`.
    #[inline]
    pub(crate) fn copy_row(&mut self, src_y: usize, dst_y: usize) {
        let stride = self.format.bytes_per_scanline();
        let src = src_y * stride;
        self.bytes.copy_within(src..src + stride, dst_y * stride);
    }
}
