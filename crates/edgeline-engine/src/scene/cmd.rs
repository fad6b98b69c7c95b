use crate::paint::Paint;
use crate::scene::shapes::{CircleCmd, LineCmd, PathCmd, RectCmd, RoundedRectCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Path(PathCmd),
}

impl DrawCmd {
    #[inline]
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCmd::Line(c) => &c.paint,
            DrawCmd::Rect(c) => &c.paint,
            DrawCmd::RoundedRect(c) => &c.paint,
            DrawCmd::Circle(c) => &c.paint,
            DrawCmd::Path(c) => &c.paint,
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<&LineCmd> {
        match self {
            DrawCmd::Line(c) => Some(c),
            _ => None,
        }
    }
}
