use edgeline_engine::coords::{CornerRadii, Path, Rect};
use edgeline_engine::paint::{Color, Paint};

use crate::edges::Edges;
use crate::painter::Painter;

use super::{BorderSide, BoxBorder, RoundedRectBorder, ShapeBorder};

/// Up to four independently colored hairlines along a rectangle's edges.
///
/// A lightweight alternative to [`BoxBorder`]: the lines are zero-width, so
/// the border takes no layout space and has no geometry to scale. An absent
/// color means that edge is not painted at all.
///
/// Edges are painted top, right, bottom, left; where two lines meet, the
/// later one wins the shared corner pixel.
///
/// ```rust,ignore
/// let divider = EdgeLineBorder::new().with_bottom(Color::from_srgb_u8(0x33, 0x33, 0x3a, 0xff));
/// divider.paint(&mut painter, rect);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdgeLineBorder {
    top: Option<Color>,
    right: Option<Color>,
    bottom: Option<Color>,
    left: Option<Color>,
}

impl EdgeLineBorder {
    /// A border with no edges.
    #[inline]
    pub const fn new() -> Self {
        Self { top: None, right: None, bottom: None, left: None }
    }

    /// The same color on every edge.
    #[inline]
    pub const fn all(color: Color) -> Self {
        Self { top: Some(color), right: Some(color), bottom: Some(color), left: Some(color) }
    }

    #[inline]
    pub const fn from_edges(
        top: Option<Color>,
        right: Option<Color>,
        bottom: Option<Color>,
        left: Option<Color>,
    ) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn top(&self) -> Option<Color> {
        self.top
    }

    #[inline]
    pub const fn right(&self) -> Option<Color> {
        self.right
    }

    #[inline]
    pub const fn bottom(&self) -> Option<Color> {
        self.bottom
    }

    #[inline]
    pub const fn left(&self) -> Option<Color> {
        self.left
    }

    pub fn with_top(self, color: Color) -> Self {
        Self { top: Some(color), ..self }
    }

    pub fn with_right(self, color: Color) -> Self {
        Self { right: Some(color), ..self }
    }

    pub fn with_bottom(self, color: Color) -> Self {
        Self { bottom: Some(color), ..self }
    }

    pub fn with_left(self, color: Color) -> Self {
        Self { left: Some(color), ..self }
    }

    /// Returns a copy with the given fields replaced; `None` keeps the current value.
    ///
    /// This cannot clear an edge. Build a new border with [`from_edges`](Self::from_edges) for that.
    pub fn copy_with(
        &self,
        top: Option<Color>,
        right: Option<Color>,
        bottom: Option<Color>,
        left: Option<Color>,
    ) -> Self {
        Self {
            top: top.or(self.top),
            right: right.or(self.right),
            bottom: bottom.or(self.bottom),
            left: left.or(self.left),
        }
    }

    /// First present color in top, right, bottom, left order; transparent if none.
    ///
    /// Stands in for the whole border when blending against a variant that
    /// only has a single side.
    pub fn representative_color(&self) -> Color {
        self.top
            .or(self.right)
            .or(self.bottom)
            .or(self.left)
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Hairlines take no layout space.
    #[inline]
    pub fn dimensions(&self) -> Edges {
        Edges::zero()
    }

    /// Returns an unchanged copy: there is no width to scale.
    #[inline]
    pub fn scale(&self, _t: f32) -> Self {
        *self
    }

    #[inline]
    pub fn inner_path(&self, rect: Rect) -> Path {
        Path::from_rect(rect)
    }

    #[inline]
    pub fn outer_path(&self, rect: Rect) -> Path {
        Path::from_rect(rect)
    }

    #[inline]
    pub fn prefers_paint_interior(&self) -> bool {
        true
    }

    /// Fills `rect` directly; the interior is the rectangle itself.
    pub fn paint_interior(&self, painter: &mut Painter, rect: Rect, paint: Paint) {
        painter.draw_rect(rect, paint);
    }

    /// Draws one hairline per present edge, top → right → bottom → left.
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        let edges = [
            (self.top, rect.top_left(), rect.top_right()),
            (self.right, rect.top_right(), rect.bottom_right()),
            (self.bottom, rect.bottom_left(), rect.bottom_right()),
            (self.left, rect.top_left(), rect.bottom_left()),
        ];

        let mut drawn = 0;
        for (color, from, to) in edges {
            if let Some(color) = color {
                painter.draw_line(from, to, Paint::hairline(color));
                drawn += 1;
            }
        }
        log::trace!("edge line border: {drawn} of 4 edges painted over {rect:?}");
    }

    /// Blend from `a` toward `self`.
    ///
    /// Returns `None` when this variant has no rule for `a`, leaving the
    /// decision to [`ShapeBorder::lerp`].
    pub fn lerp_from(&self, a: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match a {
            None => Some(ShapeBorder::EdgeLine(self.scale(t))),
            Some(ShapeBorder::EdgeLine(a)) => Some(ShapeBorder::EdgeLine(Self::blend(a, self, t))),
            Some(ShapeBorder::RoundedRect(a)) => Some(ShapeBorder::RoundedRect(RoundedRectBorder::new(
                BorderSide::lerp(a.side, self.representative_side(), t),
                a.radii.lerp(CornerRadii::zero(), t),
            ))),
            Some(ShapeBorder::Box(a)) => Some(ShapeBorder::Box(BoxBorder::new(
                BorderSide::lerp(a.top, hairline_side(self.top), t),
                BorderSide::lerp(a.right, hairline_side(self.right), t),
                BorderSide::lerp(a.bottom, hairline_side(self.bottom), t),
                BorderSide::lerp(a.left, hairline_side(self.left), t),
            ))),
            Some(ShapeBorder::Circle(_)) => {
                log::debug!("edge line border: no blend rule from circle border");
                None
            }
        }
    }

    /// Blend from `self` toward `b`.
    ///
    /// Mirror image of [`lerp_from`](Self::lerp_from).
    pub fn lerp_to(&self, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        match b {
            None => Some(ShapeBorder::EdgeLine(self.scale(1.0 - t))),
            Some(ShapeBorder::EdgeLine(b)) => Some(ShapeBorder::EdgeLine(Self::blend(self, b, t))),
            Some(ShapeBorder::RoundedRect(b)) => Some(ShapeBorder::RoundedRect(RoundedRectBorder::new(
                BorderSide::lerp(self.representative_side(), b.side, t),
                CornerRadii::zero().lerp(b.radii, t),
            ))),
            Some(ShapeBorder::Box(b)) => Some(ShapeBorder::Box(BoxBorder::new(
                BorderSide::lerp(hairline_side(self.top), b.top, t),
                BorderSide::lerp(hairline_side(self.right), b.right, t),
                BorderSide::lerp(hairline_side(self.bottom), b.bottom, t),
                BorderSide::lerp(hairline_side(self.left), b.left, t),
            ))),
            Some(ShapeBorder::Circle(_)) => {
                log::debug!("edge line border: no blend rule to circle border");
                None
            }
        }
    }

    fn blend(a: &EdgeLineBorder, b: &EdgeLineBorder, t: f32) -> EdgeLineBorder {
        EdgeLineBorder {
            top: Color::lerp_opt(a.top, b.top, t),
            right: Color::lerp_opt(a.right, b.right, t),
            bottom: Color::lerp_opt(a.bottom, b.bottom, t),
            left: Color::lerp_opt(a.left, b.left, t),
        }
    }

    fn representative_side(&self) -> BorderSide {
        BorderSide::hairline(self.representative_color())
    }
}

/// Zero-width side for one edge; an absent edge is transparent.
fn hairline_side(color: Option<Color>) -> BorderSide {
    BorderSide::hairline(color.unwrap_or(Color::TRANSPARENT))
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use edgeline_engine::coords::Vec2;
    use edgeline_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::border::{BorderStyle, CircleBorder};

    fn red() -> Color {
        Color::from_premul(1.0, 0.0, 0.0, 1.0)
    }

    fn green() -> Color {
        Color::from_premul(0.0, 1.0, 0.0, 1.0)
    }

    fn blue() -> Color {
        Color::from_premul(0.0, 0.0, 1.0, 1.0)
    }

    fn white() -> Color {
        Color::WHITE
    }

    fn hash_of(b: &EdgeLineBorder) -> u64 {
        let mut h = DefaultHasher::new();
        b.hash(&mut h);
        h.finish()
    }

    fn paint_into(border: &EdgeLineBorder, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        border.paint(&mut Painter::new(&mut list), rect);
        list
    }

    fn lines(list: &DrawList) -> Vec<(Vec2, Vec2, Color)> {
        list.items()
            .iter()
            .map(|cmd| {
                let line = cmd.as_line().expect("only lines are painted");
                assert!(line.paint.is_hairline());
                (line.from, line.to, line.paint.color)
            })
            .collect()
    }

    fn unwrap_edge_line(b: Option<ShapeBorder>) -> EdgeLineBorder {
        match b {
            Some(ShapeBorder::EdgeLine(b)) => b,
            other => panic!("expected an edge line border, got {other:?}"),
        }
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paints_top_and_left_only() {
        let border = EdgeLineBorder::new().with_top(red()).with_left(blue());
        let list = paint_into(&border, Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(
            lines(&list),
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), red()),
                (Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), blue()),
            ]
        );
    }

    #[test]
    fn paints_all_edges_in_fixed_order() {
        let border = EdgeLineBorder::from_edges(Some(red()), Some(green()), Some(blue()), Some(white()));
        let list = paint_into(&border, Rect::new(1.0, 2.0, 10.0, 20.0));

        assert_eq!(
            lines(&list),
            vec![
                (Vec2::new(1.0, 2.0), Vec2::new(11.0, 2.0), red()),
                (Vec2::new(11.0, 2.0), Vec2::new(11.0, 22.0), green()),
                (Vec2::new(1.0, 22.0), Vec2::new(11.0, 22.0), blue()),
                (Vec2::new(1.0, 2.0), Vec2::new(1.0, 22.0), white()),
            ]
        );
    }

    #[test]
    fn one_draw_per_present_edge() {
        let rect = Rect::new(0.0, 0.0, 8.0, 8.0);
        // Every subset of the four edges.
        for mask in 0u8..16 {
            let pick = |bit: u8, c: Color| (mask & (1 << bit) != 0).then_some(c);
            let border = EdgeLineBorder::from_edges(pick(0, red()), pick(1, green()), pick(2, blue()), pick(3, white()));
            let list = paint_into(&border, rect);

            let expected: Vec<Color> = [red(), green(), blue(), white()]
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            let painted: Vec<Color> = lines(&list).into_iter().map(|(_, _, c)| c).collect();
            assert_eq!(painted, expected, "mask {mask:04b}");
        }
    }

    #[test]
    fn empty_border_paints_nothing() {
        let list = paint_into(&EdgeLineBorder::new(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(list.is_empty());
    }

    #[test]
    fn paint_interior_fills_the_rect() {
        let rect = Rect::new(0.0, 0.0, 5.0, 5.0);
        let mut list = DrawList::new();
        let border = EdgeLineBorder::all(red());
        assert!(border.prefers_paint_interior());
        border.paint_interior(&mut Painter::new(&mut list), rect, Paint::fill(blue()));

        match &list.items()[..] {
            [DrawCmd::Rect(cmd)] => {
                assert_eq!(cmd.rect, rect);
                assert_eq!(cmd.paint, Paint::fill(blue()));
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    // ── equality & hashing ────────────────────────────────────────────────

    #[test]
    fn equal_fields_are_equal_and_hash_alike() {
        let a = EdgeLineBorder::new().with_top(red()).with_left(blue());
        let b = EdgeLineBorder::from_edges(Some(red()), None, None, Some(blue()));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(EdgeLineBorder::new(), EdgeLineBorder::default());
    }

    #[test]
    fn any_differing_field_is_unequal() {
        let base = EdgeLineBorder::all(red());
        assert_ne!(base, base.with_top(blue()));
        assert_ne!(base, base.with_right(blue()));
        assert_ne!(base, base.with_bottom(blue()));
        assert_ne!(base, base.with_left(blue()));
        assert_ne!(base, EdgeLineBorder::from_edges(Some(red()), Some(red()), Some(red()), None));
    }

    #[test]
    fn variant_matters_for_equality() {
        let edge = ShapeBorder::EdgeLine(EdgeLineBorder::all(red()));
        let boxed = ShapeBorder::Box(BoxBorder::all(BorderSide::hairline(red())));
        assert_ne!(edge, boxed);
    }

    // ── copy_with ─────────────────────────────────────────────────────────

    #[test]
    fn copy_with_nothing_is_identity() {
        let b = EdgeLineBorder::new().with_right(green());
        assert_eq!(b.copy_with(None, None, None, None), b);
    }

    #[test]
    fn copy_with_replaces_only_given_field() {
        let b = EdgeLineBorder::all(red());
        let c = b.copy_with(None, None, Some(blue()), None);
        assert_eq!(c.bottom(), Some(blue()));
        assert_eq!(c.top(), b.top());
        assert_eq!(c.right(), b.right());
        assert_eq!(c.left(), b.left());
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn dimensions_are_always_zero() {
        assert!(EdgeLineBorder::new().dimensions().is_zero());
        assert!(EdgeLineBorder::all(red()).dimensions().is_zero());
    }

    #[test]
    fn scale_is_a_no_op() {
        let b = EdgeLineBorder::new().with_top(red()).with_bottom(blue());
        for t in [0.0, 0.5, 1.0, 3.0, -2.0] {
            assert_eq!(b.scale(t), b);
        }
    }

    #[test]
    fn paths_are_the_rect() {
        let rect = Rect::new(2.0, 2.0, 6.0, 4.0);
        let b = EdgeLineBorder::all(red());
        assert_eq!(b.inner_path(rect), Path::from_rect(rect));
        assert_eq!(b.outer_path(rect), Path::from_rect(rect));
        assert!(b.outer_path(rect).is_closed());
    }

    // ── lerp: same variant ────────────────────────────────────────────────

    #[test]
    fn lerp_against_self_at_endpoints() {
        let b = EdgeLineBorder::new().with_top(red()).with_left(blue());
        let other = ShapeBorder::EdgeLine(b);
        assert_eq!(unwrap_edge_line(b.lerp_from(Some(&other), 0.0)), b);
        assert_eq!(unwrap_edge_line(b.lerp_from(Some(&other), 1.0)), b);
        assert_eq!(unwrap_edge_line(b.lerp_to(Some(&other), 0.0)), b);
        assert_eq!(unwrap_edge_line(b.lerp_to(Some(&other), 1.0)), b);
    }

    #[test]
    fn lerp_against_self_keeps_unclamped_colors() {
        let b = EdgeLineBorder::new()
            .with_top(Color::from_premul(0.8, 0.2, 0.2, 0.5))
            .with_right(Color::from_premul(2.0, 2.0, 2.0, 1.0));
        let other = ShapeBorder::EdgeLine(b);
        for t in [0.0, 1.0] {
            assert_eq!(unwrap_edge_line(b.lerp_from(Some(&other), t)), b);
            assert_eq!(unwrap_edge_line(b.lerp_to(Some(&other), t)), b);
        }
    }

    #[test]
    fn lerp_endpoints_select_source_and_target() {
        let a = EdgeLineBorder::all(red());
        let b = EdgeLineBorder::all(blue());
        let from_a = ShapeBorder::EdgeLine(a);
        assert_eq!(unwrap_edge_line(b.lerp_from(Some(&from_a), 0.0)), a);
        assert_eq!(unwrap_edge_line(b.lerp_from(Some(&from_a), 1.0)), b);
    }

    #[test]
    fn lerp_midpoint_blends_each_edge() {
        let a = EdgeLineBorder::new().with_top(red()).with_right(Color::BLACK);
        let b = EdgeLineBorder::new().with_top(blue()).with_bottom(green());
        let mid = unwrap_edge_line(b.lerp_from(Some(&ShapeBorder::EdgeLine(a)), 0.5));

        assert_eq!(mid.top(), Some(red().lerp(blue(), 0.5)));
        // Absent on one side behaves as transparent.
        assert_eq!(mid.right(), Some(Color::from_premul(0.0, 0.0, 0.0, 0.5)));
        assert_eq!(mid.bottom(), Some(Color::from_premul(0.0, 0.5, 0.0, 0.5)));
        // Absent on both sides stays absent.
        assert_eq!(mid.left(), None);
    }

    #[test]
    fn lerp_to_mirrors_lerp_from() {
        let a = EdgeLineBorder::all(red());
        let b = EdgeLineBorder::new().with_left(blue());
        let forward = b.lerp_from(Some(&ShapeBorder::EdgeLine(a)), 0.25);
        let backward = a.lerp_to(Some(&ShapeBorder::EdgeLine(b)), 0.25);
        assert_eq!(forward, backward);
    }

    #[test]
    fn lerp_with_nothing_is_unchanged_copy() {
        let b = EdgeLineBorder::all(green());
        assert_eq!(unwrap_edge_line(b.lerp_from(None, 0.3)), b);
        assert_eq!(unwrap_edge_line(b.lerp_to(None, 0.3)), b);
    }

    // ── lerp: sibling variants ────────────────────────────────────────────

    #[test]
    fn lerp_from_rounded_rect_uses_representative_color() {
        let rounded = RoundedRectBorder::new(BorderSide::new(Color::BLACK, 4.0), CornerRadii::all(8.0));
        let b = EdgeLineBorder::new().with_right(red()).with_left(blue());
        assert_eq!(b.representative_color(), red());

        match b.lerp_from(Some(&ShapeBorder::RoundedRect(rounded)), 0.5) {
            Some(ShapeBorder::RoundedRect(r)) => {
                assert_eq!(r.side.width, 2.0);
                assert_eq!(r.side.color, Color::BLACK.lerp(red(), 0.5));
                assert_eq!(r.radii, CornerRadii::all(4.0));
            }
            other => panic!("expected a rounded rect border, got {other:?}"),
        }
    }

    #[test]
    fn lerp_to_rounded_rect_from_empty_border_starts_transparent() {
        let rounded = RoundedRectBorder::new(BorderSide::new(red(), 2.0), CornerRadii::all(6.0));
        match EdgeLineBorder::new().lerp_to(Some(&ShapeBorder::RoundedRect(rounded)), 0.5) {
            Some(ShapeBorder::RoundedRect(r)) => {
                assert_eq!(r.side.color, Color::from_premul(0.5, 0.0, 0.0, 0.5));
                assert_eq!(r.side.width, 1.0);
                assert_eq!(r.radii, CornerRadii::all(3.0));
            }
            other => panic!("expected a rounded rect border, got {other:?}"),
        }
    }

    #[test]
    fn lerp_from_box_border_blends_per_side() {
        let boxed = BoxBorder::new(
            BorderSide::new(red(), 4.0),
            BorderSide::new(red(), 4.0),
            BorderSide::NONE,
            BorderSide::new(green(), 2.0),
        );
        let b = EdgeLineBorder::new().with_top(blue());

        match b.lerp_from(Some(&ShapeBorder::Box(boxed)), 0.5) {
            Some(ShapeBorder::Box(r)) => {
                assert_eq!(r.top, BorderSide::new(red().lerp(blue(), 0.5), 2.0));
                assert_eq!(r.right, BorderSide::new(Color::from_premul(0.5, 0.0, 0.0, 0.5), 2.0));
                assert_eq!(r.bottom.style, BorderStyle::Solid);
                assert_eq!(r.bottom.color, Color::TRANSPARENT);
                assert_eq!(r.left.width, 1.0);
            }
            other => panic!("expected a box border, got {other:?}"),
        }
    }

    #[test]
    fn lerp_to_box_border_at_end_is_target() {
        let boxed = BoxBorder::all(BorderSide::new(red(), 3.0));
        let out = EdgeLineBorder::all(blue()).lerp_to(Some(&ShapeBorder::Box(boxed)), 1.0);
        assert_eq!(out, Some(ShapeBorder::Box(boxed)));
    }

    #[test]
    fn circle_border_has_no_rule() {
        let circle = ShapeBorder::Circle(CircleBorder::new(BorderSide::new(red(), 1.0)));
        let b = EdgeLineBorder::all(blue());
        assert_eq!(b.lerp_from(Some(&circle), 0.5), None);
        assert_eq!(b.lerp_to(Some(&circle), 0.5), None);
    }
}
