//! Coordinate and geometry types shared across the draw stream and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod path;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use path::{Path, PathEl};
pub use rect::Rect;
pub use vec2::Vec2;

/// Linear interpolation between two scalars.
///
/// Written as `a * (1 - t) + b * t` so both endpoints are reproduced exactly.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
