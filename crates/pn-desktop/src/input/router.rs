//! Drag gesture tracking
//!
//! The router only remembers *which* window is being dragged and where it
//! was grabbed. Position updates always go back through the window store,
//! so a window closed mid-gesture simply stops receiving them.

use tracing::debug;

use crate::math::Vec2;
use crate::types::WindowId;

/// Result of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The shell consumed the event
    Handled,
    /// Nothing in the shell claimed the event
    Unhandled,
}

/// Active gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// Title bar drag: the window follows the pointer at a fixed grab offset
    MoveWindow {
        window_id: WindowId,
        /// Pointer position minus window top-left at gesture start
        grab_offset: Vec2,
    },
}

/// Pointer gesture state machine. `None` is idle.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag_state: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin moving `window_id`, remembering where it was grabbed
    pub fn start_window_move(&mut self, window_id: WindowId, grab_offset: Vec2) {
        debug!(window_id, x = grab_offset.x, y = grab_offset.y, "drag start");
        self.drag_state = Some(DragState::MoveWindow {
            window_id,
            grab_offset,
        });
    }

    /// Window position for a pointer at `pointer`, if a move is in progress
    pub fn move_target(&self, pointer: Vec2) -> Option<(WindowId, Vec2)> {
        match self.drag_state {
            Some(DragState::MoveWindow {
                window_id,
                grab_offset,
            }) => Some((window_id, pointer - grab_offset)),
            None => None,
        }
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_state.is_some()
    }

    /// Return to idle. Safe to call when already idle.
    pub fn end_drag(&mut self) {
        if let Some(DragState::MoveWindow { window_id, .. }) = self.drag_state.take() {
            debug!(window_id, "drag end");
        }
    }
}
