use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Builds a rectangle spanning two corner points.
    #[inline]
    pub fn from_points(min: Vec2, max: Vec2) -> Self {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn top_right(self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn bottom_left(self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// The smaller of width and height.
    #[inline]
    pub fn shortest_side(self) -> f32 {
        self.size.x.abs().min(self.size.y.abs())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Moves each edge inward by the given amount.
    ///
    /// Insets larger than the rectangle collapse it to zero size at the
    /// midpoint of the overlap rather than producing a negative extent.
    #[inline]
    pub fn inset(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        let (x0, x1) = collapse(self.left() + left, self.right() - right);
        let (y0, y1) = collapse(self.top() + top, self.bottom() - bottom);
        Rect::from_points(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Uniform [`inset`](Self::inset) on all four sides.
    #[inline]
    pub fn deflate(self, delta: f32) -> Self {
        self.inset(delta, delta, delta, delta)
    }
}

#[inline]
fn collapse(lo: f32, hi: f32) -> (f32, f32) {
    if hi < lo {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── edges & corners ───────────────────────────────────────────────────

    #[test]
    fn edges_and_corners() {
        let rect = r(2.0, 3.0, 10.0, 20.0);
        assert_eq!(rect.left(), 2.0);
        assert_eq!(rect.top(), 3.0);
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 23.0);
        assert_eq!(rect.top_right(), Vec2::new(12.0, 3.0));
        assert_eq!(rect.bottom_left(), Vec2::new(2.0, 23.0));
        assert_eq!(rect.center(), Vec2::new(7.0, 13.0));
        assert_eq!(rect.shortest_side(), 10.0);
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn deflate_shrinks_every_side() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).deflate(2.0), r(2.0, 2.0, 6.0, 6.0));
    }

    #[test]
    fn inset_per_side() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).inset(1.0, 2.0, 3.0, 4.0), r(4.0, 1.0, 4.0, 6.0));
    }

    #[test]
    fn oversized_inset_collapses_to_zero() {
        let d = r(0.0, 0.0, 4.0, 4.0).deflate(5.0);
        assert_eq!(d.size, Vec2::zero());
        assert_eq!(d.origin, Vec2::new(2.0, 2.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
