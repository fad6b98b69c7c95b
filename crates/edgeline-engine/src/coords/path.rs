use super::{CornerRadii, Rect, Vec2};

/// Cubic control-point distance for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// A single path segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Vector path in logical pixels.
///
/// Shapes hand paths to the painter for fills and to callers for hit-testing
/// and clipping. Only the construction helpers shapes actually need exist here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathEl>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2) {
        self.elements.push(PathEl::CubicTo(c1, c2, p));
    }

    pub fn close(&mut self) {
        self.elements.push(PathEl::Close);
    }

    /// True when the last element closes the current contour.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(PathEl::Close))
    }

    /// Closed polygon through `points`. Fewer than two points yields an empty path.
    pub fn from_polygon(points: &[Vec2]) -> Self {
        let mut path = Path::new();
        if points.len() < 2 {
            return path;
        }
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        path.close();
        path
    }

    /// Closed rectangle, clockwise from the top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.normalized();
        Self::from_polygon(&[rect.top_left(), rect.top_right(), rect.bottom_right(), rect.bottom_left()])
    }

    /// Closed rounded rectangle. Radii are clamped to half the shortest side.
    pub fn from_rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let rect = rect.normalized();
        let max_r = (rect.shortest_side() * 0.5).max(0.0);
        let radii = radii.map(|r| r.clamp(0.0, max_r));
        if radii.is_zero() {
            return Self::from_rect(rect);
        }

        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let mut path = Path::new();

        path.move_to(Vec2::new(l + radii.top_left, t));
        path.line_to(Vec2::new(r - radii.top_right, t));
        path.corner(Vec2::new(r, t), Vec2::new(r - radii.top_right, t), Vec2::new(r, t + radii.top_right));
        path.line_to(Vec2::new(r, b - radii.bottom_right));
        path.corner(Vec2::new(r, b), Vec2::new(r, b - radii.bottom_right), Vec2::new(r - radii.bottom_right, b));
        path.line_to(Vec2::new(l + radii.bottom_left, b));
        path.corner(Vec2::new(l, b), Vec2::new(l + radii.bottom_left, b), Vec2::new(l, b - radii.bottom_left));
        path.line_to(Vec2::new(l, t + radii.top_left));
        path.corner(Vec2::new(l, t), Vec2::new(l, t + radii.top_left), Vec2::new(l + radii.top_left, t));
        path.close();
        path
    }

    /// Closed circle approximated by four cubic arcs.
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        let rect = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        Self::from_rounded_rect(rect, CornerRadii::all(radius))
    }

    /// Axis-aligned bounds of all points, control points included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.elements.iter().flat_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
            PathEl::CubicTo(c1, c2, p) => vec![c1, c2, p],
            PathEl::Close => vec![],
        });

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (Vec2::new(min.x.min(p.x), min.y.min(p.y)), Vec2::new(max.x.max(p.x), max.y.max(p.y)))
        });
        Some(Rect::from_points(min, max))
    }

    /// Quarter-circle arc from `from` to `to` bending toward `corner`.
    fn corner(&mut self, corner: Vec2, from: Vec2, to: Vec2) {
        if from == to {
            return;
        }
        let c1 = from.lerp(corner, KAPPA);
        let c2 = to.lerp(corner, KAPPA);
        self.cubic_to(c1, c2, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_is_closed_quad() {
        let path = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Vec2::new(0.0, 0.0)),
                PathEl::LineTo(Vec2::new(10.0, 0.0)),
                PathEl::LineTo(Vec2::new(10.0, 5.0)),
                PathEl::LineTo(Vec2::new(0.0, 5.0)),
                PathEl::Close,
            ]
        );
        assert!(path.is_closed());
    }

    #[test]
    fn zero_radii_falls_back_to_rect() {
        let rect = Rect::new(1.0, 1.0, 4.0, 4.0);
        assert_eq!(Path::from_rounded_rect(rect, CornerRadii::zero()), Path::from_rect(rect));
    }

    #[test]
    fn rounded_rect_has_four_arcs() {
        let path = Path::from_rounded_rect(Rect::new(0.0, 0.0, 20.0, 20.0), CornerRadii::all(4.0));
        let arcs = path.elements().iter().filter(|el| matches!(el, PathEl::CubicTo(..))).count();
        assert_eq!(arcs, 4);
        assert!(path.is_closed());
    }

    #[test]
    fn circle_bounds_match_diameter() {
        let bounds = Path::from_circle(Vec2::new(5.0, 5.0), 5.0).bounds().unwrap();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn degenerate_polygon_is_empty() {
        assert!(Path::from_polygon(&[Vec2::zero()]).is_empty());
        assert!(Path::new().bounds().is_none());
    }
}
