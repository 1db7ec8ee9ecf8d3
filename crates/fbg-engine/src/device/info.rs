/// Raw geometry and pixel-format metadata reported by a display.
///
/// Mirrors what a framebuffer driver exposes. Nothing is validated here;
/// [`PixelFormat::from_display_info`](super::PixelFormat::from_display_info)
/// decides whether the description is usable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Visible width in pixels.
    pub width: u32,

    /// Visible height in pixels.
    pub height: u32,

    /// Storage size of one pixel. Must be a whole number of bytes.
    pub bits_per_pixel: u32,

    /// Distance between the starts of two consecutive rows, in bytes.
    ///
    /// May exceed `width * bytes_per_pixel` when the driver pads rows.
    pub bytes_per_scanline: u32,

    /// Byte offset of the red channel inside a pixel.
    pub red_offset: u32,

    /// Byte offset of the green channel inside a pixel.
    pub green_offset: u32,

    /// Byte offset of the blue channel inside a pixel.
    pub blue_offset: u32,
}

impl DisplayInfo {
    /// 32-bit little-endian XRGB, the usual layout of desktop framebuffers.
    pub const fn xrgb8888(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: 32,
            bytes_per_scanline: width.saturating_mul(4),
            red_offset: 2,
            green_offset: 1,
            blue_offset: 0,
        }
    }

    /// Packed 24-bit RGB.
    pub const fn rgb888(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: 24,
            bytes_per_scanline: width.saturating_mul(3),
            red_offset: 0,
            green_offset: 1,
            blue_offset: 2,
        }
    }

    /// Same layout with a padded row stride.
    pub const fn with_scanline(mut self, bytes_per_scanline: u32) -> Self {
        self.bytes_per_scanline = bytes_per_scanline;
        self
    }

    /// Total bytes spanned by the described buffer, if it fits in `usize`.
    pub fn buffer_len(&self) -> Option<usize> {
        (self.bytes_per_scanline as usize).checked_mul(self.height as usize)
    }
}
