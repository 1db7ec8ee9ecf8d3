use crate::coords::Point;
use crate::paint::Color;
use crate::surface::Framebuffer;

use super::line::line;
use super::pattern::ScanlinePattern;

/// Draws the outline of a triangle as three connected lines.
#[allow(clippy::too_many_arguments)]
pub fn draw_triangle(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Color,
) {
    let encoded = fb.format().encode(color);
    let [a, b, c] = [(x1, y1), (x2, y2), (x3, y3)].map(Vertex::from);
    line(fb, a.x, a.y, b.x, b.y, &encoded);
    line(fb, b.x, b.y, c.x, c.y, &encoded);
    line(fb, c.x, c.y, a.x, a.y, &encoded);
}

/// Fills a triangle with scanline spans.
///
/// Coverage per row is the half-open span `[left, right)` between the two
/// edges, x values truncated. Pixels on the right edges and the row holding
/// a lone apex vertex therefore stay empty (one pixel of tolerance versus the
/// exact geometric triangle). Collinear or coincident vertices draw nothing.
///
/// Spans are whole-pixel copies: inside a filled span the non-channel bytes
/// of each pixel (X or alpha) are reset to zero. Row padding past the
/// visible width is never touched.
#[allow(clippy::too_many_arguments)]
pub fn fill_triangle(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Color,
) {
    let mut v = [(x1, y1), (x2, y2), (x3, y3)].map(Vertex::from);

    if is_degenerate(&v) {
        log::debug!("skipping degenerate triangle {v:?}");
        return;
    }

    let Some(pattern) = bounding_pattern(fb, &v, color) else {
        return;
    };

    // Descending y: v1 is the lowest vertex on screen, v3 the highest.
    v.sort_by(|a, b| b.y.cmp(&a.y));
    let [v1, v2, v3] = v;

    if v1.y == v2.y {
        // Flat edge at the bottom, apex v3 above it.
        let tri = FlatTriangle::new(v3, v1.y, (v1.x as f64, v2.x as f64));
        tri.fill(fb, &pattern, v3.y, v1.y);
    } else if v2.y == v3.y {
        // Flat edge at the top, apex v1 below it.
        let tri = FlatTriangle::new(v1, v2.y, (v2.x as f64, v3.x as f64));
        tri.fill(fb, &pattern, v2.y, v1.y);
    } else {
        // Split along the v1-v3 edge at v2's height.
        let x4 = v1.x as f64
            + (v2.y - v1.y) as f64 / (v3.y - v1.y) as f64 * (v3.x - v1.x) as f64;
        let seam = (v2.x as f64, x4);

        // Row v2.y is filled once, by the half that contains v3.
        FlatTriangle::new(v1, v2.y, seam).fill(fb, &pattern, v2.y + 1, v1.y);
        FlatTriangle::new(v3, v2.y, seam).fill(fb, &pattern, v3.y, v2.y);
    }
}

pub fn fill_triangle_points(fb: &mut Framebuffer, vertices: [Point; 3], color: Color) {
    let [a, b, c] = vertices;
    fill_triangle(fb, a.x, a.y, b.x, b.y, c.x, c.y, color);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Vertex {
    x: i64,
    y: i64,
}

impl From<(i32, i32)> for Vertex {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x: x as i64, y: y as i64 }
    }
}

/// Zero signed area: all three vertices on one line (or coincident).
fn is_degenerate(v: &[Vertex; 3]) -> bool {
    let [a, b, c] = v.map(|p| (p.x as i128, p.y as i128));
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0) == 0
}

/// Pattern as wide as the triangle's on-surface bounding box, or `None` if
/// no column of it is visible.
fn bounding_pattern(fb: &Framebuffer, v: &[Vertex; 3], color: Color) -> Option<ScanlinePattern> {
    let min_x = v.iter().map(|p| p.x).min()?.max(0);
    let max_x = v.iter().map(|p| p.x).max()?.min(fb.width() as i64 - 1);
    if min_x > max_x {
        return None;
    }
    Some(ScanlinePattern::new(fb.format(), color, (max_x - min_x + 1) as usize))
}

/// Triangle with one horizontal edge: the base case of the scanline fill.
struct FlatTriangle {
    apex_x: f64,
    apex_y: i64,
    flat_y: i64,
    flat_x: (f64, f64),
}

impl FlatTriangle {
    fn new(apex: Vertex, flat_y: i64, flat_x: (f64, f64)) -> Self {
        Self {
            apex_x: apex.x as f64,
            apex_y: apex.y,
            flat_y,
            flat_x,
        }
    }

    /// Fills rows `first..=last`, clipped to the framebuffer.
    fn fill(&self, fb: &mut Framebuffer, pattern: &ScanlinePattern, first: i64, last: i64) {
        let height = (self.flat_y - self.apex_y).abs();
        if height == 0 {
            return;
        }
        let height = height as f64;

        // Δx per row walked away from the apex, one per edge.
        let step_a = (self.flat_x.0 - self.apex_x) / height;
        let step_b = (self.flat_x.1 - self.apex_x) / height;

        // Both edges leave the same apex, so the smaller step is left on every row.
        let (left, right) = if step_a <= step_b {
            (step_a, step_b)
        } else {
            (step_b, step_a)
        };

        let width = fb.width() as i64;
        let first = first.max(0);
        let last = last.min(fb.height() as i64 - 1);

        for y in first..=last {
            let dist = (y - self.apex_y).abs() as f64;
            let x0 = ((self.apex_x + left * dist) as i64).max(0);
            let x1 = ((self.apex_x + right * dist) as i64).min(width);
            if x0 < x1 {
                fb.write_span(x0 as usize, y as usize, pattern.span((x1 - x0) as usize));
            }
        }
    }
}
