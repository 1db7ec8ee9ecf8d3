use crate::coords::Rect;
use crate::paint::Color;
use crate::surface::Framebuffer;

use super::line::line;

/// Draws the one-pixel border of `rect`.
///
/// The border is the outermost ring of the pixels `fill_box` would cover,
/// so negative sizes are normalized first and empty boxes draw nothing.
pub fn draw_box(fb: &mut Framebuffer, rect: Rect, color: Color) {
    let r = rect.normalized();
    if r.is_empty() {
        return;
    }

    let encoded = fb.format().encode(color);
    let (x0, y0) = (r.x as i64, r.y as i64);
    let (x1, y1) = (r.right() - 1, r.bottom() - 1);

    line(fb, x0, y0, x1, y0, &encoded);
    line(fb, x1, y0, x1, y1, &encoded);
    line(fb, x1, y1, x0, y1, &encoded);
    line(fb, x0, y1, x0, y0, &encoded);
}

/// Fills `rect`, clipped to the framebuffer.
///
/// The top visible row is written pixel by pixel; each row below is a bulk
/// copy of that row's span.
pub fn fill_box(fb: &mut Framebuffer, rect: Rect, color: Color) {
    let Some(r) = rect.normalized().intersect(fb.bounds()) else {
        return;
    };

    // Clipped against the surface, so every coordinate is in range.
    let (x, y, w, h) = (r.x as usize, r.y as usize, r.w as usize, r.h as usize);

    let encoded = fb.format().encode(color);
    for col in x..x + w {
        fb.put(col, y, &encoded);
    }

    for row in y + 1..y + h {
        fb.copy_span(x, y, row, w);
    }
}
