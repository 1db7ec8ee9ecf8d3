use crate::coords::Point;
use crate::device::EncodedColor;
use crate::paint::Color;
use crate::surface::Framebuffer;

use super::pixel::plot;

/// Draws an aliased segment from `(x1, y1)` to `(x2, y2)`, both ends included.
///
/// Exactly one pixel is produced per step along the dominant axis. Lines
/// whose vertical extent is strictly larger are scanned along y. Pixels
/// outside the framebuffer are dropped.
pub fn draw_line(fb: &mut Framebuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let encoded = fb.format().encode(color);
    line(fb, x1 as i64, y1 as i64, x2 as i64, y2 as i64, &encoded);
}

pub fn draw_line_points(fb: &mut Framebuffer, a: Point, b: Point, color: Color) {
    draw_line(fb, a.x, a.y, b.x, b.y, color);
}

pub(crate) fn line(fb: &mut Framebuffer, x1: i64, y1: i64, x2: i64, y2: i64, color: &EncodedColor) {
    // Zero length: no slope to compute.
    if x1 == x2 && y1 == y2 {
        plot(fb, x1, y1, color);
        return;
    }

    // Scan along the primary axis `a`, interpolate the secondary axis `b`.
    let steep = (x2 - x1).abs() < (y2 - y1).abs();
    let (mut a1, mut b1, mut a2, mut b2) = if steep {
        (y1, x1, y2, x2)
    } else {
        (x1, y1, x2, y2)
    };
    if a1 > a2 {
        std::mem::swap(&mut a1, &mut a2);
        std::mem::swap(&mut b1, &mut b2);
    }

    // a2 > a1 here: the primary extent is the larger one and the line is not a point.
    // The slope stays the exact ratio rise / run; i128 holds any product of two i32 spans.
    let run = (a2 - a1) as i128;
    let rise = (b2 - b1) as i128;

    // Only the on-surface stretch of the primary axis is walked.
    let extent = if steep { fb.height() } else { fb.width() };
    let first = a1.max(0);
    let last = a2.min(extent as i64 - 1);

    for a in first..=last {
        // Floor of the exact position: b1 at a1 and b2 at a2.
        let b = b1 + (rise * (a - a1) as i128).div_euclid(run) as i64;
        let (x, y) = if steep { (b, a) } else { (a, b) };
        plot(fb, x, y, color);
    }
}
