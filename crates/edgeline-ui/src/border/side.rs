use edgeline_engine::coords::lerp_f32;
use edgeline_engine::paint::{Color, Paint};

/// Whether a side is painted at all.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BorderStyle {
    /// Skip the side; it takes no space.
    None,
    #[default]
    Solid,
}

/// One side of a border with width: color, stroke width and style.
///
/// A width of `0.0` paints a hairline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderSide {
    pub color: Color,
    pub width: f32,
    pub style: BorderStyle,
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl BorderSide {
    /// A side that paints nothing and takes no space.
    pub const NONE: BorderSide = BorderSide {
        color: Color::BLACK,
        width: 0.0,
        style: BorderStyle::None,
    };

    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width, style: BorderStyle::Solid }
    }

    #[inline]
    pub const fn hairline(color: Color) -> Self {
        Self::new(color, 0.0)
    }

    /// Space this side occupies.
    #[inline]
    pub fn effective_width(self) -> f32 {
        match self.style {
            BorderStyle::None => 0.0,
            BorderStyle::Solid => self.width,
        }
    }

    /// Stroke paint for this side, or `None` when it is not painted.
    #[inline]
    pub fn to_paint(self) -> Option<Paint> {
        match self.style {
            BorderStyle::None => None,
            BorderStyle::Solid => Some(Paint::stroke(self.color, self.width.max(0.0))),
        }
    }

    /// Scales the width; a non-positive factor removes the side.
    #[inline]
    pub fn scale(self, t: f32) -> Self {
        Self {
            color: self.color,
            width: self.width * t.max(0.0),
            style: if t <= 0.0 { BorderStyle::None } else { self.style },
        }
    }

    /// Blends two sides.
    ///
    /// The endpoints are returned unchanged. When only one side is painted,
    /// the unpainted one contributes a transparent color and the result is
    /// solid, so a side fades in rather than popping.
    pub fn lerp(a: BorderSide, b: BorderSide, t: f32) -> BorderSide {
        if t == 0.0 {
            return a;
        }
        if t == 1.0 {
            return b;
        }

        let width = lerp_f32(a.width, b.width, t);
        if width < 0.0 {
            return BorderSide::NONE;
        }

        if a.style == b.style {
            return BorderSide {
                color: a.color.lerp(b.color, t),
                width,
                style: a.style,
            };
        }

        let visible = |side: BorderSide| match side.style {
            BorderStyle::Solid => side.color,
            BorderStyle::None => Color::TRANSPARENT,
        };
        BorderSide::new(visible(a).lerp(visible(b), t), width)
    }
}
