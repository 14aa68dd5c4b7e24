//! Window creation parameters

use crate::math::{Size, Vec2};
use crate::registry::Tool;

/// Everything the store needs to create a window.
///
/// Placement and sizing policy lives in `DesktopEngine`; the store takes
/// the resolved values as given.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub tool: Tool,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
}

impl WindowConfig {
    /// Config for `tool` with its registry title
    pub fn for_tool(tool: Tool, position: Vec2, size: Size) -> Self {
        Self {
            tool,
            title: tool.title().to_string(),
            position,
            size,
        }
    }
}
