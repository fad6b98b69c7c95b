use edgeline_engine::coords::{Path, Rect, Vec2};
use edgeline_engine::paint::Paint;

use crate::edges::Edges;
use crate::painter::Painter;

use super::{BorderSide, BorderStyle, ShapeBorder};

/// Rectangular border with an independent [`BorderSide`] per edge.
///
/// Sides are painted inside the rectangle, so the border's widths are its
/// [`dimensions`](Self::dimensions).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxBorder {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
}

impl BoxBorder {
    #[inline]
    pub const fn new(top: BorderSide, right: BorderSide, bottom: BorderSide, left: BorderSide) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(side: BorderSide) -> Self {
        Self::new(side, side, side, side)
    }

    #[inline]
    pub const fn symmetric(vertical: BorderSide, horizontal: BorderSide) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// All four sides identical.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    pub fn dimensions(&self) -> Edges {
        Edges::new(
            self.top.effective_width(),
            self.right.effective_width(),
            self.bottom.effective_width(),
            self.left.effective_width(),
        )
    }

    pub fn scale(&self, t: f32) -> Self {
        Self::new(self.top.scale(t), self.right.scale(t), self.bottom.scale(t), self.left.scale(t))
    }

    pub fn inner_path(&self, rect: Rect) -> Path {
        Path::from_rect(self.dimensions().deflate_rect(rect))
    }

    pub fn outer_path(&self, rect: Rect) -> Path {
        Path::from_rect(rect)
    }

    #[inline]
    pub fn prefers_paint_interior(&self) -> bool {
        true
    }

    pub fn paint_interior(&self, painter: &mut Painter, rect: Rect, paint: Paint) {
        painter.draw_rect(rect, paint);
    }

    /// Uniform solid borders are one stroked rectangle; anything else is
    /// painted side by side, top → right → bottom → left.
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.is_uniform() {
            let side = self.top;
            if side.style == BorderStyle::None {
                return;
            }
            // Stroke is centered on the geometry; move it inward by half a width.
            let w = side.width.max(0.0);
            painter.draw_rect(rect.deflate(w * 0.5), Paint::stroke(side.color, w));
            return;
        }

        let inset = self.dimensions();
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let inner_tl = Vec2::new(l + inset.left, t + inset.top);
        let inner_tr = Vec2::new(r - inset.right, t + inset.top);
        let inner_br = Vec2::new(r - inset.right, b - inset.bottom);
        let inner_bl = Vec2::new(l + inset.left, b - inset.bottom);

        let sides = [
            (self.top, [rect.top_left(), rect.top_right(), inner_tr, inner_tl]),
            (self.right, [rect.top_right(), rect.bottom_right(), inner_br, inner_tr]),
            (self.bottom, [rect.bottom_right(), rect.bottom_left(), inner_bl, inner_br]),
            (self.left, [rect.bottom_left(), rect.top_left(), inner_tl, inner_bl]),
        ];

        for (side, quad) in sides {
            match side.style {
                BorderStyle::None => {}
                BorderStyle::Solid if side.width <= 0.0 => {
                    painter.draw_line(quad[0], quad[1], Paint::hairline(side.color));
                }
                BorderStyle::Solid => {
                    painter.draw_path(Path::from_polygon(&quad), Paint::fill(side.color));
                }
            }
        }
    }

    pub fn lerp_from(&self, a: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match a {
            None => Some(ShapeBorder::Box(self.scale(t))),
            Some(ShapeBorder::Box(a)) => Some(ShapeBorder::Box(Self::blend(a, self, t))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::RoundedRect(_) | ShapeBorder::Circle(_)) => None,
        }
    }

    pub fn lerp_to(&self, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match b {
            None => Some(ShapeBorder::Box(self.scale(1.0 - t))),
            Some(ShapeBorder::Box(b)) => Some(ShapeBorder::Box(Self::blend(self, b, t))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::RoundedRect(_) | ShapeBorder::Circle(_)) => None,
        }
    }

    fn blend(a: &BoxBorder, b: &BoxBorder, t: f32) -> BoxBorder {
        BoxBorder::new(
            BorderSide::lerp(a.top, b.top, t),
            BorderSide::lerp(a.right, b.right, t),
            BorderSide::lerp(a.bottom, b.bottom, t),
            BorderSide::lerp(a.left, b.left, t),
        )
    }
}
