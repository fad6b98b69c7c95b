//! Shape borders: outlines that know their own insets, paths and paint.
//!
//! [`ShapeBorder`] is a closed set of variants. Every operation dispatches with
//! an exhaustive `match`, so adding a variant forces each blend rule to be
//! revisited.
//!
//! Interpolation is double-sided: the target is asked first
//! ([`ShapeBorder::lerp_from`]), then the source ([`ShapeBorder::lerp_to`]).
//! A variant returns `None` when it has no rule for the other side, and
//! [`ShapeBorder::lerp`] then switches from source to target at `t = 0.5`.

mod box_border;
mod circle;
mod edge_line;
mod rounded_rect;
mod side;

pub use box_border::BoxBorder;
pub use circle::CircleBorder;
pub use edge_line::EdgeLineBorder;
pub use rounded_rect::RoundedRectBorder;
pub use side::{BorderSide, BorderStyle};

use edgeline_engine::coords::{Path, Rect};
use edgeline_engine::paint::Paint;

use crate::edges::Edges;
use crate::painter::Painter;

/// Any border a decoration can carry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeBorder {
    /// Zero-width colored lines along each edge.
    EdgeLine(EdgeLineBorder),
    /// Rectangular border with an independent side per edge.
    Box(BoxBorder),
    /// Rounded rectangle with one side definition.
    RoundedRect(RoundedRectBorder),
    /// Circle inscribed in the rectangle.
    Circle(CircleBorder),
}

impl ShapeBorder {
    /// Space the border takes inside the rectangle it decorates.
    pub fn dimensions(&self) -> Edges {
        match self {
            ShapeBorder::EdgeLine(b) => b.dimensions(),
            ShapeBorder::Box(b) => b.dimensions(),
            ShapeBorder::RoundedRect(b) => b.dimensions(),
            ShapeBorder::Circle(b) => b.dimensions(),
        }
    }

    pub fn scale(&self, t: f32) -> ShapeBorder {
        match self {
            ShapeBorder::EdgeLine(b) => ShapeBorder::EdgeLine(b.scale(t)),
            ShapeBorder::Box(b) => ShapeBorder::Box(b.scale(t)),
            ShapeBorder::RoundedRect(b) => ShapeBorder::RoundedRect(b.scale(t)),
            ShapeBorder::Circle(b) => ShapeBorder::Circle(b.scale(t)),
        }
    }

    /// Outline of the area inside the border.
    pub fn inner_path(&self, rect: Rect) -> Path {
        match self {
            ShapeBorder::EdgeLine(b) => b.inner_path(rect),
            ShapeBorder::Box(b) => b.inner_path(rect),
            ShapeBorder::RoundedRect(b) => b.inner_path(rect),
            ShapeBorder::Circle(b) => b.inner_path(rect),
        }
    }

    /// Outline of the shape, border included.
    pub fn outer_path(&self, rect: Rect) -> Path {
        match self {
            ShapeBorder::EdgeLine(b) => b.outer_path(rect),
            ShapeBorder::Box(b) => b.outer_path(rect),
            ShapeBorder::RoundedRect(b) => b.outer_path(rect),
            ShapeBorder::Circle(b) => b.outer_path(rect),
        }
    }

    /// Whether [`paint_interior`](Self::paint_interior) should be used instead
    /// of filling [`outer_path`](Self::outer_path).
    pub fn prefers_paint_interior(&self) -> bool {
        match self {
            ShapeBorder::EdgeLine(b) => b.prefers_paint_interior(),
            ShapeBorder::Box(b) => b.prefers_paint_interior(),
            ShapeBorder::RoundedRect(b) => b.prefers_paint_interior(),
            ShapeBorder::Circle(b) => b.prefers_paint_interior(),
        }
    }

    /// Fills the shape's interior with `paint`.
    pub fn paint_interior(&self, painter: &mut Painter, rect: Rect, paint: Paint) {
        match self {
            ShapeBorder::EdgeLine(b) => b.paint_interior(painter, rect, paint),
            ShapeBorder::Box(b) => b.paint_interior(painter, rect, paint),
            ShapeBorder::RoundedRect(b) => b.paint_interior(painter, rect, paint),
            ShapeBorder::Circle(b) => b.paint_interior(painter, rect, paint),
        }
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        match self {
            ShapeBorder::EdgeLine(b) => b.paint(painter, rect),
            ShapeBorder::Box(b) => b.paint(painter, rect),
            ShapeBorder::RoundedRect(b) => b.paint(painter, rect),
            ShapeBorder::Circle(b) => b.paint(painter, rect),
        }
    }

    /// Blend from `a` toward `self`, or `None` if `self` has no rule for `a`.
    pub fn lerp_from(&self, a: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match self {
            ShapeBorder::EdgeLine(b) => b.lerp_from(a, t),
            ShapeBorder::Box(b) => b.lerp_from(a, t),
            ShapeBorder::RoundedRect(b) => b.lerp_from(a, t),
            ShapeBorder::Circle(b) => b.lerp_from(a, t),
        }
    }

    /// Blend from `self` toward `b`, or `None` if `self` has no rule for `b`.
    pub fn lerp_to(&self, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match self {
            ShapeBorder::EdgeLine(a) => a.lerp_to(b, t),
            ShapeBorder::Box(a) => a.lerp_to(b, t),
            ShapeBorder::RoundedRect(a) => a.lerp_to(b, t),
            ShapeBorder::Circle(a) => a.lerp_to(b, t),
        }
    }

    /// Blends two optional borders.
    ///
    /// Asks `b` first, then `a`; when neither has a rule the result switches
    /// from `a` to `b` at the halfway point.
    pub fn lerp(a: Option<&ShapeBorder>, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        if a == b {
            return a.copied();
        }

        let blended = b
            .and_then(|b| b.lerp_from(a, t))
            .or_else(|| a.and_then(|a| a.lerp_to(b, t)));
        if blended.is_some() {
            return blended;
        }

        log::debug!("shape border: no blend rule between {a:?} and {b:?}, switching at t = 0.5");
        if t < 0.5 { a.copied() } else { b.copied() }
    }
}

impl From<EdgeLineBorder> for ShapeBorder {
    fn from(b: EdgeLineBorder) -> Self {
        ShapeBorder::EdgeLine(b)
    }
}

impl From<BoxBorder> for ShapeBorder {
    fn from(b: BoxBorder) -> Self {
        ShapeBorder::Box(b)
    }
}

impl From<RoundedRectBorder> for ShapeBorder {
    fn from(b: RoundedRectBorder) -> Self {
        ShapeBorder::RoundedRect(b)
    }
}

impl From<CircleBorder> for ShapeBorder {
    fn from(b: CircleBorder) -> Self {
        ShapeBorder::Circle(b)
    }
}
