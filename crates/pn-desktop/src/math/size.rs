//! 2D size type

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Subtract a margin from both dimensions, never going below zero
    pub fn shrink_by(self, margin: Size) -> Size {
        Size::new(
            (self.width - margin.width).max(0.0),
            (self.height - margin.height).max(0.0),
        )
    }
}
