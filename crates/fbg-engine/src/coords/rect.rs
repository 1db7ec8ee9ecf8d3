/// Axis-aligned box in device pixels covering `[x, x + w) x [y, y + h)`.
///
/// Width and height may be negative; see [`Rect::normalized`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge, widened so it cannot overflow.
    #[inline]
    pub fn right(self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge, widened so it cannot overflow.
    #[inline]
    pub fn bottom(self) -> i64 {
        self.y as i64 + self.h as i64
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Flips negative width/height into the origin so both become non-negative.
    ///
    /// `(5, 5, -3, -3)` and `(2, 2, 3, 3)` describe the same pixels.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        let mut w = self.w;
        let mut h = self.h;

        if w < 0 {
            x = x.saturating_add(w);
            w = w.saturating_neg();
        }
        if h < 0 {
            y = y.saturating_add(h);
            h = h.saturating_neg();
        }

        Rect::new(x, y, w, h)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.x.max(b.x);
        let y0 = a.y.max(b.y);
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());

        let w = x1 - x0 as i64;
        let h = y1 - y0 as i64;

        if w <= 0 || h <= 0 {
            None
        } else {
            // Both extents are bounded by one of the inputs, so they fit in i32.
            Some(Rect::new(x0, y0, w as i32, h as i32))
        }
    }
}
