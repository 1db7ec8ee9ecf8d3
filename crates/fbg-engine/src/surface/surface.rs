use std::io;

use crate::coords::{Point, Rect};
use crate::device::{Acquisition, DisplayInfo, DisplayRegion, PixelFormat, SurfaceProvider};
use crate::error::{RasterError, SurfaceError};
use crate::paint::Color;
use crate::raster;
use crate::time::{FrameClock, FrameStats};

use super::Framebuffer;

/// Double-buffered drawing surface bound to a display.
///
/// This type is the presentation context:
/// - acquires the onscreen region from a `SurfaceProvider`
/// - owns an offscreen `Framebuffer` of identical size that all drawing targets
/// - copies the full offscreen frame onscreen on `present`
/// - hands the region back exactly once, on `destroy` or drop
///
/// The provider is borrowed for the surface's lifetime, so it cannot be
/// acquired twice or torn down while a surface still writes to it.
pub struct Surface<'p, P: SurfaceProvider> {
    /// Provider that owns the display device.
    provider: &'p mut P,

    /// Onscreen region. `Some` for the whole life of the surface; taken only
    /// during release.
    onscreen: Option<P::Region>,

    /// Draw target.
    offscreen: Framebuffer,

    /// Presentation counters.
    clock: FrameClock,
}

impl<'p, P: SurfaceProvider> Surface<'p, P> {
    /// Acquires the display and allocates the offscreen buffer.
    ///
    /// If anything fails after the region was handed out, the region goes
    /// back to the provider before the error is returned.
    pub fn create(provider: &'p mut P) -> Result<Self, SurfaceError> {
        let Acquisition { info, region } = provider.acquire().map_err(|err| {
            log::warn!("display acquisition failed: {err:#}");
            SurfaceError::Acquisition(err)
        })?;

        let format = match validate(&info, &region) {
            Ok(format) => format,
            Err(err) => {
                log::warn!("display metadata rejected: {err:#}");
                provider.release(region);
                return Err(SurfaceError::Acquisition(err));
            }
        };

        let offscreen = match Framebuffer::try_new(format) {
            Ok(fb) => fb,
            Err(err) => {
                log::debug!(
                    "offscreen allocation of {} bytes failed ({err}); releasing display",
                    format.size()
                );
                provider.release(region);
                return Err(SurfaceError::Allocation { bytes: format.size() });
            }
        };

        log::info!(
            "surface ready: {}x{}, {} bytes/pixel, {} bytes/scanline, rgb offsets {:?}",
            format.width(),
            format.height(),
            format.bytes_per_pixel(),
            format.bytes_per_scanline(),
            format.channel_offsets(),
        );

        Ok(Self {
            provider,
            onscreen: Some(region),
            offscreen,
            clock: FrameClock::new(),
        })
    }

    /// Releases the display and frees the offscreen buffer.
    ///
    /// Consumes the surface; dropping it has the same effect.
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(region) = self.onscreen.take() {
            self.provider.release(region);
            log::info!("surface released after {} frames", self.clock.stats().frames);
        }
    }

    /// Copies the whole offscreen frame onscreen.
    ///
    /// Either every byte is copied or an `Io` error is returned.
    pub fn present(&mut self) -> Result<(), SurfaceError> {
        let region = self
            .onscreen
            .as_mut()
            .ok_or_else(|| io::Error::other("surface has no onscreen region"))?;

        let frame = self.offscreen.as_bytes();
        let result = region.bytes_mut().and_then(|dst| {
            let dst = dst.get_mut(..frame.len()).ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "onscreen region shrank below frame size")
            })?;
            dst.copy_from_slice(frame);
            Ok(())
        });

        if let Err(err) = result {
            log::warn!("present failed: {err}");
            return Err(err.into());
        }

        let stats = self.clock.tick();
        log::trace!("presented frame {} (fps {:?})", stats.frames, stats.fps);
        Ok(())
    }

    #[inline]
    pub fn format(&self) -> &PixelFormat {
        self.offscreen.format()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.offscreen.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.offscreen.height()
    }

    /// Frame size in bytes (`bytes_per_scanline * height`).
    #[inline]
    pub fn size(&self) -> usize {
        self.offscreen.len()
    }

    /// Byte offset of `(x, y)`; see [`PixelFormat::pixel_offset`].
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        self.format().pixel_offset(x, y)
    }

    /// Read-only view of the draw target.
    #[inline]
    pub fn offscreen(&self) -> &Framebuffer {
        &self.offscreen
    }

    /// Color currently drawn at `(x, y)` in the offscreen buffer.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.offscreen.pixel(x, y)
    }

    #[inline]
    pub fn frame_stats(&self) -> FrameStats {
        self.clock.stats()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn clear(&mut self, color: Color) {
        raster::clear(&mut self.offscreen, color);
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        raster::draw_pixel(&mut self.offscreen, x, y, color)
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        raster::draw_line(&mut self.offscreen, x1, y1, x2, y2, color);
    }

    pub fn draw_line_points(&mut self, a: Point, b: Point, color: Color) {
        raster::draw_line_points(&mut self.offscreen, a, b, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        raster::draw_triangle(&mut self.offscreen, x1, y1, x2, y2, x3, y3, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        raster::fill_triangle(&mut self.offscreen, x1, y1, x2, y2, x3, y3, color);
    }

    pub fn fill_triangle_points(&mut self, vertices: [Point; 3], color: Color) {
        raster::fill_triangle_points(&mut self.offscreen, vertices, color);
    }

    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        raster::draw_box(&mut self.offscreen, Rect::new(x, y, w, h), color);
    }

    pub fn fill_box(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        raster::fill_box(&mut self.offscreen, Rect::new(x, y, w, h), color);
    }
}

impl<P: SurfaceProvider> Drop for Surface<'_, P> {
    fn drop(&mut self) {
        self.release();
    }
}

fn validate<R: DisplayRegion>(info: &DisplayInfo, region: &R) -> anyhow::Result<PixelFormat> {
    let format = PixelFormat::from_display_info(info)?;
    anyhow::ensure!(
        region.len() >= format.size(),
        "display region of {} bytes cannot hold a {} byte frame",
        region.len(),
        format.size()
    );
    Ok(format)
}
