use crate::coords::Path;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Arbitrary path draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub paint: Paint,
}

impl DrawList {
    /// Records a path draw command. Empty paths are dropped.
    #[inline]
    pub fn push_path(&mut self, path: Path, paint: Paint) {
        if path.is_empty() {
            return;
        }
        self.push(DrawCmd::Path(PathCmd { path, paint }));
    }
}
