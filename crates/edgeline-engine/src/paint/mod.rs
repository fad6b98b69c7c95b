//! Paint model shared between UI and the draw stream.
//!
//! Scope:
//! - color representation (linear premultiplied alpha) and blending
//! - paint descriptions (fill vs. stroke, hairline convention)
//!
//! Geometry types remain in `coords`.

pub mod color;
mod error;

pub use color::Color;
pub use error::ParseColorError;

/// How a shape is covered by its paint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintStyle {
    /// Cover the interior.
    Fill,
    /// Stroke the outline, centered on the geometry.
    ///
    /// `width == 0.0` is a hairline: one device pixel regardless of scale.
    Stroke { width: f32 },
}

/// Paint description for a single draw command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
}

impl Paint {
    #[inline]
    pub const fn fill(color: Color) -> Self {
        Self { color, style: PaintStyle::Fill }
    }

    #[inline]
    pub const fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke { width } }
    }

    /// Zero-width stroke.
    #[inline]
    pub const fn hairline(color: Color) -> Self {
        Self::stroke(color, 0.0)
    }

    #[inline]
    pub fn is_hairline(&self) -> bool {
        matches!(self.style, PaintStyle::Stroke { width } if width == 0.0)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::fill(color)
    }
}
