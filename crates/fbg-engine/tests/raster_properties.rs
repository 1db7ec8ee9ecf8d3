//! Property tests for the rasterizer against padded framebuffers.
//! Pixels are checked through readback and raw bytes, never through the
//! drawing code itself.

use fbg_engine::coords::Rect;
use fbg_engine::device::{DisplayInfo, PixelFormat};
use fbg_engine::paint::Color;
use fbg_engine::raster;
use fbg_engine::surface::Framebuffer;
use fbg_engine::RasterError;

const W: u32 = 16;
const H: u32 = 12;
const INK: Color = Color::new(0xC0, 0x40, 0x20);

/// 16x12 XRGB with 8 padding bytes per scanline.
fn padded() -> Framebuffer {
    let info = DisplayInfo::xrgb8888(W, H).with_scanline(W * 4 + 8);
    Framebuffer::try_new(PixelFormat::from_display_info(&info).unwrap()).unwrap()
}

fn lit(fb: &Framebuffer) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            if fb.pixel(x, y) == Some(INK) {
                out.push((x, y));
            }
        }
    }
    out
}

fn untouched(fb: &Framebuffer) -> bool {
    fb.as_bytes().iter().all(|&b| b == 0)
}

proptest::proptest! {
    /// A pixel write changes exactly its three channel bytes.
    #[test]
    fn draw_pixel_touches_only_its_channels(
        x in 0..W as i32,
        y in 0..H as i32,
        rgb in 0u32..=0xFF_FFFF,
    ) {
        let mut fb = padded();
        let color = Color::from_rgb_u32(rgb);
        raster::draw_pixel(&mut fb, x, y, color).unwrap();

        let mut expected = vec![0u8; fb.len()];
        let base = fb.format().pixel_offset(x as usize, y as usize);
        let [r, g, b] = fb.format().channel_offsets();
        expected[base + r] = color.r;
        expected[base + g] = color.g;
        expected[base + b] = color.b;

        assert_eq!(fb.as_bytes(), expected.as_slice());
        assert_eq!(fb.pixel(x, y), Some(color));
    }

    /// Anything outside [0, W) x [0, H) is rejected and leaves the buffer alone.
    #[test]
    fn draw_pixel_rejects_outside(x in -40i32..40, y in -40i32..40) {
        proptest::prop_assume!(!(0..W as i32).contains(&x) || !(0..H as i32).contains(&y));
        let mut fb = padded();
        let err = raster::draw_pixel(&mut fb, x, y, INK).unwrap_err();
        assert!(matches!(err, RasterError::OutOfBounds { .. }));
        assert!(untouched(&fb));
    }

    /// Endpoint order never changes the pixels of a line.
    #[test]
    fn line_is_symmetric(
        x1 in -8i32..24, y1 in -8i32..20,
        x2 in -8i32..24, y2 in -8i32..20,
    ) {
        let mut forward = padded();
        raster::draw_line(&mut forward, x1, y1, x2, y2, INK);
        let mut backward = padded();
        raster::draw_line(&mut backward, x2, y2, x1, y1, INK);
        assert_eq!(forward.as_bytes(), backward.as_bytes());
    }

    /// An on-surface line lights both endpoints and one pixel per step of its
    /// longer axis.
    #[test]
    fn line_has_one_pixel_per_primary_step(
        x1 in 0..W as i32, y1 in 0..H as i32,
        x2 in 0..W as i32, y2 in 0..H as i32,
    ) {
        let mut fb = padded();
        raster::draw_line(&mut fb, x1, y1, x2, y2, INK);

        let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
        let pixels = lit(&fb);
        assert_eq!(pixels.len(), steps + 1);

        assert!(pixels.contains(&(x1, y1)), "start ({x1}, {y1}) missing");
        assert!(pixels.contains(&(x2, y2)), "end ({x2}, {y2}) missing");
    }

    /// Negative sizes describe the same box from the opposite corner.
    #[test]
    fn fill_box_negative_size_is_flipped(
        x in -6i32..22, y in -6i32..18,
        w in -12i32..12, h in -12i32..12,
    ) {
        let mut a = padded();
        raster::fill_box(&mut a, Rect::new(x, y, w, h), INK);
        let mut b = padded();
        raster::fill_box(&mut b, Rect::new(x + w, y + h, -w, -h), INK);
        assert_eq!(a.as_bytes(), b.as_bytes());

        let visible = Rect::new(x, y, w, h)
            .intersect(a.bounds())
            .map_or(0, |r| (r.w * r.h) as usize);
        assert_eq!(lit(&a).len(), visible);
    }

    /// Collinear vertices never draw anything.
    #[test]
    fn degenerate_triangle_draws_nothing(
        x in -4i32..20, y in -4i32..16,
        dx in -4i32..5, dy in -4i32..5,
        k in 0i32..4,
    ) {
        let mut fb = padded();
        raster::fill_triangle(&mut fb, x, y, x + dx, y + dy, x + k * dx, y + k * dy, INK);
        assert!(untouched(&fb));
    }

    /// Vertex order never changes the filled pixels.
    #[test]
    fn fill_triangle_ignores_vertex_order(
        x1 in -4i32..20, y1 in -4i32..16,
        x2 in -4i32..20, y2 in -4i32..16,
        x3 in -4i32..20, y3 in -4i32..16,
    ) {
        let mut a = padded();
        raster::fill_triangle(&mut a, x1, y1, x2, y2, x3, y3, INK);
        let mut b = padded();
        raster::fill_triangle(&mut b, x3, y3, x1, y1, x2, y2, INK);
        let mut c = padded();
        raster::fill_triangle(&mut c, x2, y2, x3, y3, x1, y1, INK);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.as_bytes(), c.as_bytes());
    }
}

#[test]
fn clear_paints_every_pixel_and_keeps_padding() {
    let mut fb = padded();
    raster::clear(&mut fb, INK);
    assert_eq!(lit(&fb).len(), (W * H) as usize);

    let stride = fb.format().bytes_per_scanline();
    for row in fb.as_bytes().chunks(stride) {
        assert!(row[W as usize * 4..].iter().all(|&b| b == 0));
    }
}

#[test]
fn zero_length_line_is_one_pixel() {
    let mut fb = padded();
    raster::draw_line(&mut fb, 7, 3, 7, 3, INK);
    assert_eq!(lit(&fb), vec![(7, 3)]);
}

#[test]
fn right_triangle_covers_below_hypotenuse() {
    let mut fb = padded();
    raster::fill_triangle(&mut fb, 0, 0, 10, 0, 0, 10, INK);
    for y in 0..H as i32 {
        for x in 0..W as i32 {
            assert_eq!(fb.pixel(x, y) == Some(INK), x + y < 10, "({x}, {y})");
        }
    }
}

#[test]
fn outline_box_matches_lines() {
    let mut boxed = padded();
    raster::draw_box(&mut boxed, Rect::new(3, 2, 6, 5), INK);

    let mut lines = padded();
    raster::draw_line(&mut lines, 3, 2, 8, 2, INK);
    raster::draw_line(&mut lines, 8, 2, 8, 6, INK);
    raster::draw_line(&mut lines, 8, 6, 3, 6, INK);
    raster::draw_line(&mut lines, 3, 6, 3, 2, INK);

    assert_eq!(boxed.as_bytes(), lines.as_bytes());
}
