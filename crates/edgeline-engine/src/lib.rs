//! Edgeline engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, color and paint, and the recorded draw stream.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
