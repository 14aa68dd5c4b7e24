//! Desktop engine coordinating all components

use serde::Serialize;
use tracing::{debug, warn};

use crate::chrome::{ChromeControls, ChromeTarget, Menu};
use crate::config::ShellConfig;
use crate::error::{Change, DesktopError, DesktopResult};
use crate::input::{InputResult, InputRouter};
use crate::math::{Size, Vec2};
use crate::registry::{resolve, Tool, ToolLayout};
use crate::session::{SessionMode, ShellSession};
use crate::window::{WindowConfig, WindowId, WindowManager, WindowRegion, ZOrder};

/// Window as the view layer paints it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub tool: Tool,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    pub z_order: ZOrder,
    pub focused: bool,
}

/// Desktop engine coordinating all desktop components
///
/// One instance per running shell. This is the only handle through which
/// the view layer reads or changes window, session, and chrome state:
/// - Session (login screen, desktop, shutdown screen)
/// - Window manager (open, close, focus, z-order)
/// - Input router (title bar drag)
/// - Chrome controls (start menu, menu bar)
///
/// Window state only changes while the session is in
/// [`SessionMode::Desktop`]. Requests arriving in any other mode are
/// absorbed the same way requests for stale window ids are.
pub struct DesktopEngine {
    config: ShellConfig,
    /// Session mode state machine
    pub session: ShellSession,
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Start menu and menu bar
    pub chrome: ChromeControls,
    screen_size: Size,
    /// Pending "tool not available" notice
    notice: Option<String>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with the stock configuration
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            session: ShellSession::new(config.shutdown_delay_ms),
            windows: WindowManager::new(),
            input: InputRouter::new(),
            chrome: ChromeControls::new(),
            screen_size: config.screen_size,
            notice: None,
            config,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Initialize with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    /// Track a new screen size. Open windows keep their size and position.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }

    fn desktop_active(&self) -> bool {
        self.session.mode().is_desktop()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Submit the login form
    pub fn login(&mut self, credential: &str) -> DesktopResult<()> {
        self.session.login(credential, &self.config.password)
    }

    /// Start the shutdown screen. The desktop and chrome disappear at once;
    /// windows are destroyed when the delay completes in [`Self::tick`].
    pub fn shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.session.begin_shutdown(now_ms)?;
        self.input.end_drag();
        self.chrome.reset();
        Ok(())
    }

    /// Advance timers. Returns true when a shutdown completed on this tick.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.session.tick(now_ms) {
            return false;
        }

        self.windows.clear();
        self.chrome.reset();
        self.input.end_drag();
        self.notice = None;
        true
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window for the named tool on top of the stack.
    ///
    /// An unknown or unimplemented name leaves state untouched, records a
    /// notice for the view layer, and returns [`DesktopError::ToolNotAvailable`].
    pub fn open_tool(&mut self, name: &str) -> DesktopResult<WindowId> {
        if !self.desktop_active() {
            return Err(DesktopError::InvalidOperation {
                op: "open_tool",
                reason: "desktop is not active",
            });
        }

        let tool = match resolve(name).into_result() {
            Ok(tool) => tool,
            Err(err) => {
                warn!(tool = name, "tool not available");
                self.notice = Some(err.to_string());
                return Err(err);
            }
        };

        let next_id = self.windows.next_id();
        let (position, size) = match tool.layout() {
            ToolLayout::NearFullscreen => (
                self.config.fullscreen_origin,
                self.screen_size.shrink_by(self.config.fullscreen_margin),
            ),
            ToolLayout::Standard => (
                self.config.cascade_position(next_id),
                self.config.default_window_size,
            ),
        };

        let config = WindowConfig::for_tool(tool, position, size);
        Ok(self.windows.create(config))
    }

    /// Close a window. Stale ids are absorbed.
    pub fn close_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        if !self.desktop_active() {
            return Ok(Change::Unchanged);
        }
        Ok(self.windows.close(id))
    }

    /// Raise a window to the top. Stale ids are absorbed.
    pub fn focus_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        if !self.desktop_active() {
            return Ok(Change::Unchanged);
        }
        Ok(self.windows.focus(id))
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Start dragging `id` from a pointer-down on its title bar
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        if !self.desktop_active() {
            return InputResult::Unhandled;
        }

        let window_position = match self.windows.get(id) {
            Some(window) => window.position,
            None => return InputResult::Unhandled,
        };

        self.windows.focus(id);
        let grab_offset = Vec2::new(x, y) - window_position;
        self.input.start_window_move(id, grab_offset);
        InputResult::Handled
    }

    /// Pointer-down anywhere on the desktop surface (not on chrome)
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if !self.desktop_active() {
            return InputResult::Unhandled;
        }

        self.chrome.dismiss_outside(ChromeTarget::Elsewhere);

        let Some((window_id, region)) = self.windows.region_at(Vec2::new(x, y)) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.windows.close(window_id);
            }
            WindowRegion::TitleBar => {
                return self.start_move_drag(window_id, x, y);
            }
            WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => {
                self.windows.focus(window_id);
            }
            WindowRegion::Content => {
                self.windows.focus(window_id);
            }
        }
        InputResult::Handled
    }

    /// Pointer moved anywhere in the viewport
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        match self.input.move_target(Vec2::new(x, y)) {
            Some((window_id, position)) => {
                self.windows.move_window(window_id, position);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pointer released anywhere in the viewport
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    /// Taskbar start button
    pub fn click_start_button(&mut self) {
        if !self.desktop_active() {
            return;
        }
        self.chrome.dismiss_outside(ChromeTarget::StartButton);
        self.chrome.toggle_start_menu();
    }

    /// Start menu "Shutdown" entry
    pub fn start_menu_shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.chrome.dismiss_outside(ChromeTarget::StartMenu);
        self.shutdown(now_ms)
    }

    /// Click a menu bar title
    pub fn click_menu(&mut self, menu: Menu) {
        if !self.desktop_active() {
            return;
        }
        self.chrome.dismiss_outside(ChromeTarget::MenuBar);
        self.chrome.toggle_menu(menu);
    }

    /// Choose an entry from the Tools dropdown
    pub fn select_menu_tool(&mut self, name: &str) -> DesktopResult<WindowId> {
        self.chrome.dismiss_outside(ChromeTarget::MenuBar);
        self.chrome.close_menu();
        self.open_tool(name)
    }

    /// Manage dropdown "Shutdown" entry
    pub fn manage_menu_shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.chrome.dismiss_outside(ChromeTarget::MenuBar);
        self.shutdown(now_ms)
    }

    /// Double-click on a desktop icon
    pub fn open_desktop_icon(&mut self, name: &str) -> DesktopResult<WindowId> {
        self.chrome.dismiss_outside(ChromeTarget::Elsewhere);
        self.open_tool(name)
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Notice waiting to be acknowledged, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            debug!("notice dismissed");
        }
    }

    /// Windows in paint order (lowest rank first). Empty unless the desktop
    /// is showing.
    pub fn window_views(&self) -> Vec<WindowView> {
        if !self.desktop_active() {
            return Vec::new();
        }

        let focused = self.windows.focused();
        self.windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView {
                id: w.id,
                tool: w.tool,
                title: w.title.clone(),
                position: w.position,
                size: w.size,
                z_order: w.z_order,
                focused: Some(w.id) == focused,
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = f32> {
        -4000.0f32..4000.0
    }

    proptest! {
        /// A drag moves the window by exactly the pointer delta, and
        /// moves after release change nothing
        #[test]
        fn drag_follows_pointer_delta(
            start in (coord(), coord()),
            p0 in (coord(), coord()),
            p1 in (coord(), coord()),
            later in (coord(), coord()),
        ) {
            let mut engine = DesktopEngine::new();
            engine.login("0000").unwrap();
            let id = engine.open_tool("Services").unwrap();
            engine.windows.move_window(id, Vec2::new(start.0, start.1));

            prop_assert_eq!(engine.start_move_drag(id, p0.0, p0.1), InputResult::Handled);
            engine.handle_pointer_move(p1.0, p1.1);

            let pos = engine.windows.get(id).unwrap().position;
            prop_assert!((pos.x - (start.0 + (p1.0 - p0.0))).abs() < 0.01);
            prop_assert!((pos.y - (start.1 + (p1.1 - p0.1))).abs() < 0.01);

            prop_assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
            prop_assert_eq!(
                engine.handle_pointer_move(later.0, later.1),
                InputResult::Unhandled
            );
            prop_assert_eq!(engine.windows.get(id).unwrap().position, pos);
        }
    }
}
