use edgeline_engine::coords::{Path, Rect};
use edgeline_engine::paint::Paint;

use crate::edges::Edges;
use crate::painter::Painter;

use super::{BorderSide, ShapeBorder};

/// Circle inscribed in the rectangle, centered, with diameter equal to the
/// shortest side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CircleBorder {
    pub side: BorderSide,
}

impl CircleBorder {
    #[inline]
    pub const fn new(side: BorderSide) -> Self {
        Self { side }
    }

    #[inline]
    pub fn dimensions(&self) -> Edges {
        Edges::all(self.side.effective_width())
    }

    pub fn scale(&self, t: f32) -> Self {
        Self::new(self.side.scale(t))
    }

    pub fn inner_path(&self, rect: Rect) -> Path {
        let radius = (rect.shortest_side() * 0.5 - self.side.effective_width()).max(0.0);
        Path::from_circle(rect.center(), radius)
    }

    pub fn outer_path(&self, rect: Rect) -> Path {
        Path::from_circle(rect.center(), rect.shortest_side() * 0.5)
    }

    /// Circles have no cheaper fill than their path.
    #[inline]
    pub fn prefers_paint_interior(&self) -> bool {
        false
    }

    pub fn paint_interior(&self, painter: &mut Painter, rect: Rect, paint: Paint) {
        painter.draw_path(self.outer_path(rect), paint);
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(paint) = self.side.to_paint() else {
            return;
        };
        let radius = (rect.shortest_side() - self.side.width.max(0.0)) * 0.5;
        painter.draw_circle(rect.center(), radius.max(0.0), paint);
    }

    pub fn lerp_from(&self, a: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match a {
            None => Some(ShapeBorder::Circle(self.scale(t))),
            Some(ShapeBorder::Circle(a)) => Some(ShapeBorder::Circle(CircleBorder::new(BorderSide::lerp(a.side, self.side, t)))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::Box(_) | ShapeBorder::RoundedRect(_)) => None,
        }
    }

    pub fn lerp_to(&self, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match b {
            None => Some(ShapeBorder::Circle(self.scale(1.0 - t))),
            Some(ShapeBorder::Circle(b)) => Some(ShapeBorder::Circle(CircleBorder::new(BorderSide::lerp(self.side, b.side, t)))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::Box(_) | ShapeBorder::RoundedRect(_)) => None,
        }
    }
}
