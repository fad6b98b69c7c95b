use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList};

/// Line segment draw payload. Lines are always stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub paint: Paint,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, paint: Paint) -> Self {
        Self { from, to, paint }
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, paint: Paint) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, paint)));
    }

    /// Records a one-device-pixel line.
    #[inline]
    pub fn push_hairline(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.push_line(from, to, Paint::hairline(color));
    }
}
