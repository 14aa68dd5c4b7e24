//! Hit-test regions of a window frame

use serde::{Deserialize, Serialize};

/// Part of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowRegion {
    /// Drag handle
    TitleBar,
    CloseButton,
    /// Rendered but permanently disabled
    MinimizeButton,
    /// Rendered but permanently disabled
    MaximizeButton,
    /// Panel body
    Content,
}

impl WindowRegion {
    /// Controls that are drawn but never act
    pub fn is_disabled(&self) -> bool {
        matches!(self, WindowRegion::MinimizeButton | WindowRegion::MaximizeButton)
    }
}
