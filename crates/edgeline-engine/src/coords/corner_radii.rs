use super::lerp_f32;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero when building paths.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.top_left), f(self.top_right), f(self.bottom_right), f(self.bottom_left))
    }

    #[inline]
    pub fn scale(self, t: f32) -> Self {
        self.map(|r| r * t)
    }

    /// Shrinks every radius by `delta`, clamping at zero.
    ///
    /// Used for the inner edge of a stroked rounded rectangle.
    #[inline]
    pub fn deflate(self, delta: f32) -> Self {
        self.map(|r| (r - delta).max(0.0))
    }

    #[inline]
    pub fn lerp(self, other: CornerRadii, t: f32) -> Self {
        Self::new(
            lerp_f32(self.top_left, other.top_left, t),
            lerp_f32(self.top_right, other.top_right, t),
            lerp_f32(self.bottom_right, other.bottom_right, t),
            lerp_f32(self.bottom_left, other.bottom_left, t),
        )
    }
}
