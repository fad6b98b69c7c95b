mod circle;
mod line;
mod path;
mod rect;
mod rounded_rect;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use path::PathCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
