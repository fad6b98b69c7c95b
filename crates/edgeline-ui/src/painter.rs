use edgeline_engine::coords::{CornerRadii, Path, Rect, Vec2};
use edgeline_engine::paint::{Color, Paint};
use edgeline_engine::scene::DrawList;

/// Drawing surface passed to border and decoration `paint` calls.
///
/// Wraps the engine's `DrawList` with a high-level API. Every call records
/// exactly one command on top of what is already there, so call order is
/// paint order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    /// Number of commands recorded so far.
    #[inline]
    pub fn recorded(&self) -> usize {
        self.draw_list.len()
    }

    // ── lines ─────────────────────────────────────────────────────────────

    /// Line from `from` to `to`. The paint is always treated as a stroke.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, paint: Paint) {
        self.draw_list.push_line(from, to, paint);
    }

    // ── rectangles ────────────────────────────────────────────────────────

    /// Filled or stroked rectangle, depending on `paint.style`.
    pub fn draw_rect(&mut self, rect: Rect, paint: Paint) {
        self.draw_list.push_rect(rect, paint);
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Rounded rectangle. Zero radii degrade to a plain rectangle.
    pub fn draw_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, paint: Paint) {
        if radii.is_zero() {
            self.draw_rect(rect, paint);
        } else {
            self.draw_list.push_rounded_rect(rect, radii, paint);
        }
    }

    // ── other shapes ──────────────────────────────────────────────────────

    pub fn draw_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.draw_list.push_circle(center, radius, paint);
    }

    /// Arbitrary path. Empty paths record nothing.
    pub fn draw_path(&mut self, path: Path, paint: Paint) {
        self.draw_list.push_path(path, paint);
    }
}
