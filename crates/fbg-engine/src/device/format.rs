use anyhow::{Context, Result};

use crate::paint::Color;

use super::DisplayInfo;

/// Validated, immutable pixel layout of a surface.
///
/// Invariants (checked by [`PixelFormat::from_display_info`]):
/// - `width`, `height` > 0
/// - `bytes_per_pixel >= 3`
/// - `bytes_per_scanline >= width * bytes_per_pixel`
/// - channel offsets lie in `[0, bytes_per_pixel)` and are pairwise distinct
/// - `size() == bytes_per_scanline * height` fits in `usize`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelFormat {
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    bytes_per_scanline: usize,
    red_offset: usize,
    green_offset: usize,
    blue_offset: usize,
    size: usize,
}

impl PixelFormat {
    /// Validates display metadata and derives the byte layout.
    pub fn from_display_info(info: &DisplayInfo) -> Result<Self> {
        anyhow::ensure!(
            info.width > 0 && info.height > 0,
            "display reports a zero-sized mode ({}x{})",
            info.width,
            info.height
        );
        anyhow::ensure!(
            info.bits_per_pixel % 8 == 0,
            "{} bits per pixel is not a whole number of bytes",
            info.bits_per_pixel
        );

        let bytes_per_pixel = (info.bits_per_pixel / 8) as usize;
        anyhow::ensure!(
            bytes_per_pixel >= 3,
            "{bytes_per_pixel} bytes per pixel cannot hold three color channels"
        );

        let width = info.width as usize;
        let height = info.height as usize;
        let bytes_per_scanline = info.bytes_per_scanline as usize;

        let row_bytes = width
            .checked_mul(bytes_per_pixel)
            .context("row width overflows usize")?;
        anyhow::ensure!(
            bytes_per_scanline >= row_bytes,
            "scanline of {bytes_per_scanline} bytes is shorter than {width} pixels of {bytes_per_pixel} bytes"
        );

        let [red_offset, green_offset, blue_offset] =
            [info.red_offset, info.green_offset, info.blue_offset].map(|o| o as usize);
        for (name, offset) in [("red", red_offset), ("green", green_offset), ("blue", blue_offset)] {
            anyhow::ensure!(
                offset < bytes_per_pixel,
                "{name} channel offset {offset} lies outside a {bytes_per_pixel} byte pixel"
            );
        }
        anyhow::ensure!(
            red_offset != green_offset && green_offset != blue_offset && red_offset != blue_offset,
            "color channels overlap (red {red_offset}, green {green_offset}, blue {blue_offset})"
        );

        let size = info.buffer_len().context("surface size overflows usize")?;

        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            bytes_per_scanline,
            red_offset,
            green_offset,
            blue_offset,
            size,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    #[inline]
    pub fn bytes_per_scanline(&self) -> usize {
        self.bytes_per_scanline
    }

    /// Byte offsets of the red, green and blue channels inside a pixel.
    #[inline]
    pub fn channel_offsets(&self) -> [usize; 3] {
        [self.red_offset, self.green_offset, self.blue_offset]
    }

    /// Bytes covered by the whole surface (`bytes_per_scanline * height`).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Byte offset of pixel `(x, y)`.
    ///
    /// Pure arithmetic: no bounds are enforced, callers pick their own policy.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        x * self.bytes_per_pixel + y * self.bytes_per_scanline
    }

    /// Resolves where each channel byte of `color` goes within a pixel.
    #[inline]
    pub fn encode(&self, color: Color) -> EncodedColor {
        EncodedColor([
            (self.red_offset, color.r),
            (self.green_offset, color.g),
            (self.blue_offset, color.b),
        ])
    }
}

/// A color resolved against a `PixelFormat`: three `(offset, byte)` pairs.
///
/// Encoding once and stamping the same bytes into many pixels is the line
/// and span fast path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EncodedColor([(usize, u8); 3]);

impl EncodedColor {
    /// Writes the three channel bytes into `pixel`, leaving other bytes alone.
    ///
    /// `pixel` must be at least `bytes_per_pixel` long.
    #[inline]
    pub fn write_into(&self, pixel: &mut [u8]) {
        for &(offset, value) in &self.0 {
            pixel[offset] = value;
        }
    }

    /// Reads a color back from `pixel` using the same layout.
    #[inline]
    pub fn decode(format: &PixelFormat, pixel: &[u8]) -> Color {
        let [r, g, b] = format.channel_offsets().map(|o| pixel[o]);
        Color::new(r, g, b)
    }
}
