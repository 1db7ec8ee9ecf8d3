use crate::device::EncodedColor;
use crate::error::RasterError;
use crate::paint::Color;
use crate::surface::Framebuffer;

/// Writes the three channel bytes of one pixel.
///
/// Only `0 <= x < width`, `0 <= y < height` is accepted; anything else,
/// including the one-past-the-edge row and column, is rejected with
/// `OutOfBounds` and nothing is written.
pub fn draw_pixel(fb: &mut Framebuffer, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
    let Some((px, py)) = fb.locate(x as i64, y as i64) else {
        return Err(RasterError::OutOfBounds {
            x,
            y,
            width: fb.width(),
            height: fb.height(),
        });
    };

    let encoded = fb.format().encode(color);
    fb.put(px, py, &encoded);
    Ok(())
}

/// Writes a pre-encoded pixel, dropping it if off-surface.
#[inline]
pub(crate) fn plot(fb: &mut Framebuffer, x: i64, y: i64, color: &EncodedColor) {
    if let Some((x, y)) = fb.locate(x, y) {
        fb.put(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DisplayInfo, PixelFormat};

    fn fb() -> Framebuffer {
        let info = DisplayInfo::xrgb8888(4, 3).with_scanline(20);
        Framebuffer::try_new(PixelFormat::from_display_info(&info).unwrap()).unwrap()
    }

    #[test]
    fn writes_at_pixel_offset() {
        let mut fb = fb();
        draw_pixel(&mut fb, 1, 2, Color::new(0xAA, 0xBB, 0xCC)).unwrap();
        let at = fb.format().pixel_offset(1, 2);
        assert_eq!(&fb.as_bytes()[at..at + 4], &[0xCC, 0xBB, 0xAA, 0]);
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 3);
    }

    #[test]
    fn last_column_stays_out_of_padding() {
        let mut fb = fb();
        draw_pixel(&mut fb, 3, 0, Color::white()).unwrap();
        assert!(fb.as_bytes()[16..20].iter().all(|&b| b == 0));
    }

    #[test]
    fn width_column_is_rejected() {
        let mut fb = fb();
        let err = draw_pixel(&mut fb, 4, 0, Color::white()).unwrap_err();
        assert_eq!(err, RasterError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 });
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn height_row_is_rejected() {
        let mut fb = fb();
        assert!(draw_pixel(&mut fb, 0, 3, Color::white()).is_err());
        assert!(draw_pixel(&mut fb, 4, 3, Color::white()).is_err());
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn negative_is_rejected() {
        let mut fb = fb();
        assert!(draw_pixel(&mut fb, -1, 0, Color::white()).is_err());
        assert!(draw_pixel(&mut fb, 0, i32::MIN, Color::white()).is_err());
    }

    #[test]
    fn plot_drops_off_surface() {
        let mut fb = fb();
        let white = fb.format().encode(Color::white());
        plot(&mut fb, 4, 0, &white);
        plot(&mut fb, i64::MAX, -7, &white);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }
}
