use crate::device::PixelFormat;
use crate::paint::Color;

/// A run of pixels pre-encoded in a single color.
///
/// Span fills slice this instead of encoding pixel by pixel. Bytes that are
/// not color channels (X, alpha) are zero, and a span write copies them
/// along with the channels.
#[derive(Debug, Clone)]
pub(crate) struct ScanlinePattern {
    bytes: Vec<u8>,
    bytes_per_pixel: usize,
}

impl ScanlinePattern {
    pub(crate) fn new(format: &PixelFormat, color: Color, pixels: usize) -> Self {
        let bytes_per_pixel = format.bytes_per_pixel();
        let encoded = format.encode(color);

        let mut bytes = vec![0; pixels * bytes_per_pixel];
        for px in bytes.chunks_exact_mut(bytes_per_pixel) {
            encoded.write_into(px);
        }

        Self { bytes, bytes_per_pixel }
    }

    #[inline]
    pub(crate) fn pixels(&self) -> usize {
        self.bytes.len() / self.bytes_per_pixel
    }

    /// Leading `pixels` pixels of the pattern, capped at its length.
    #[inline]
    pub(crate) fn span(&self, pixels: usize) -> &[u8] {
        &self.bytes[..pixels.min(self.pixels()) * self.bytes_per_pixel]
    }
}
