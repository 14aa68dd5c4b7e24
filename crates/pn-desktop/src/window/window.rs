//! Window entity

use serde::{Deserialize, Serialize};

use super::{WindowId, WindowRegion, ZOrder};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::registry::Tool;

/// One open tool panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    /// Immutable after creation
    pub tool: Tool,
    pub title: String,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Fixed at creation
    pub size: Size,
    /// Stacking rank (higher = on top)
    pub z_order: ZOrder,
}

impl Window {
    /// Full frame rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Title bar strip, including the buttons
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Rectangle of the n-th title bar button counted from the right edge
    /// (0 = close, 1 = maximize, 2 = minimize)
    fn button_rect(&self, index_from_right: u32) -> Rect {
        let style = &FRAME_STYLE;
        let stride = style.button_size + style.button_spacing;
        let x = self.position.x + self.size.width
            - style.button_margin
            - style.button_size
            - index_from_right as f32 * stride;
        let y = self.position.y + (style.title_bar_height - style.button_size) / 2.0;
        Rect::new(x, y, style.button_size, style.button_size)
    }

    /// Region of this window under `point`, if any
    pub fn region_at(&self, point: Vec2) -> Option<WindowRegion> {
        if !self.rect().contains(point) {
            return None;
        }

        if self.title_bar_rect().contains(point) {
            if self.button_rect(0).contains(point) {
                return Some(WindowRegion::CloseButton);
            }
            if self.button_rect(1).contains(point) {
                return Some(WindowRegion::MaximizeButton);
            }
            if self.button_rect(2).contains(point) {
                return Some(WindowRegion::MinimizeButton);
            }
            return Some(WindowRegion::TitleBar);
        }

        Some(WindowRegion::Content)
    }
}
