//! Edgeline UI — shape borders and decorations on top of `edgeline-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use edgeline_ui::prelude::*;
//!
//! let mut draw_list = DrawList::new();
//! let mut painter = Painter::new(&mut draw_list);
//!
//! Decoration::new()
//!     .background(Color::from_straight(0.1, 0.1, 0.12, 1.0))
//!     .border(EdgeLineBorder::new()
//!         .with_top(Color::from_straight(1.0, 0.0, 0.0, 1.0))
//!         .with_left(Color::from_straight(0.0, 0.0, 1.0, 1.0)))
//!     .paint(&mut painter, Rect::new(0.0, 0.0, 120.0, 40.0));
//! // Hand draw_list to a renderer.
//! ```
//!
//! # Animating between borders
//!
//! [`ShapeBorder::lerp`](border::ShapeBorder::lerp) blends any two borders.
//! Variants that know each other blend smoothly; anything else switches at
//! the halfway point.

pub mod border;
pub mod decoration;
pub mod edges;
pub mod painter;

/// Everything needed to build and paint borders — import this in your component files.
pub mod prelude {
    pub use crate::border::{
        BorderSide, BorderStyle, BoxBorder, CircleBorder, EdgeLineBorder, RoundedRectBorder, ShapeBorder,
    };
    pub use crate::decoration::Decoration;
    pub use crate::edges::Edges;
    pub use crate::painter::Painter;

    // Re-export the engine primitives everyone needs.
    pub use edgeline_engine::coords::{CornerRadii, Path, PathEl, Rect, Vec2};
    pub use edgeline_engine::paint::{Color, Paint, PaintStyle};
    pub use edgeline_engine::scene::{DrawCmd, DrawList};
}
