use edgeline_engine::coords::Rect;
use edgeline_engine::paint::{Color, Paint};

use crate::border::ShapeBorder;
use crate::painter::Painter;

/// Background plus optional shape border, painted as one unit.
///
/// All properties are optional; an empty `Decoration` paints nothing.
///
/// # Example
/// ```rust,ignore
/// Decoration::new()
///     .background(Color::from_straight(0.1, 0.1, 0.15, 1.0))
///     .border(EdgeLineBorder::new().with_bottom(Color::from_straight(0.3, 0.3, 0.35, 1.0)))
///     .paint(&mut painter, rect);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Decoration {
    background: Option<Color>,
    border: Option<ShapeBorder>,
}

impl Decoration {
    pub const fn new() -> Self {
        Self { background: None, border: None }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: impl Into<ShapeBorder>) -> Self {
        self.border = Some(border.into());
        self
    }

    #[inline]
    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    #[inline]
    pub fn shape_border(&self) -> Option<&ShapeBorder> {
        self.border.as_ref()
    }

    /// Background first, then the border on top.
    ///
    /// The background goes through the border's interior fast path when it
    /// asks for it, and through its outer path otherwise.
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(color) = self.background {
            match &self.border {
                Some(border) if border.prefers_paint_interior() => {
                    border.paint_interior(painter, rect, Paint::fill(color))
                }
                Some(border) => painter.draw_path(border.outer_path(rect), Paint::fill(color)),
                None => painter.fill_rect(rect, color),
            }
        }

        if let Some(border) = &self.border {
            border.paint(painter, rect);
        }
    }

    /// Blends backgrounds as colors and borders through [`ShapeBorder::lerp`].
    pub fn lerp(a: &Decoration, b: &Decoration, t: f32) -> Decoration {
        Decoration {
            background: Color::lerp_opt(a.background, b.background, t),
            border: ShapeBorder::lerp(a.border.as_ref(), b.border.as_ref(), t),
        }
    }
}
