use edgeline_engine::coords::{CornerRadii, Path, Rect};
use edgeline_engine::paint::Paint;

use crate::edges::Edges;
use crate::painter::Painter;

use super::{BorderSide, ShapeBorder};

/// Rounded rectangle outlined by a single side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRectBorder {
    pub side: BorderSide,
    pub radii: CornerRadii,
}

impl RoundedRectBorder {
    #[inline]
    pub const fn new(side: BorderSide, radii: CornerRadii) -> Self {
        Self { side, radii }
    }

    #[inline]
    pub fn dimensions(&self) -> Edges {
        Edges::all(self.side.effective_width())
    }

    pub fn scale(&self, t: f32) -> Self {
        Self::new(self.side.scale(t), self.radii.scale(t))
    }

    pub fn inner_path(&self, rect: Rect) -> Path {
        let w = self.side.effective_width();
        Path::from_rounded_rect(rect.deflate(w), self.radii.deflate(w))
    }

    pub fn outer_path(&self, rect: Rect) -> Path {
        Path::from_rounded_rect(rect, self.radii)
    }

    #[inline]
    pub fn prefers_paint_interior(&self) -> bool {
        true
    }

    pub fn paint_interior(&self, painter: &mut Painter, rect: Rect, paint: Paint) {
        painter.draw_rounded_rect(rect, self.radii, paint);
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(paint) = self.side.to_paint() else {
            return;
        };
        let half = self.side.width.max(0.0) * 0.5;
        painter.draw_rounded_rect(rect.deflate(half), self.radii.deflate(half), paint);
    }

    pub fn lerp_from(&self, a: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match a {
            None => Some(ShapeBorder::RoundedRect(self.scale(t))),
            Some(ShapeBorder::RoundedRect(a)) => Some(ShapeBorder::RoundedRect(Self::blend(a, self, t))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::Box(_) | ShapeBorder::Circle(_)) => None,
        }
    }

    pub fn lerp_to(&self, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match b {
            None => Some(ShapeBorder::RoundedRect(self.scale(1.0 - t))),
            Some(ShapeBorder::RoundedRect(b)) => Some(ShapeBorder::RoundedRect(Self::blend(self, b, t))),
            Some(ShapeBorder::EdgeLine(_) | ShapeBorder::Box(_) | ShapeBorder::Circle(_)) => None,
        }
    }

    fn blend(a: &RoundedRectBorder, b: &RoundedRectBorder, t: f32) -> RoundedRectBorder {
        RoundedRectBorder::new(BorderSide::lerp(a.side, b.side, t), a.radii.lerp(b.radii, t))
    }
}
