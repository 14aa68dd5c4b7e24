//! Window Manager for the Paskanet II shell
//!
//! This crate provides the state behind the simulated desktop:
//! - Panel registry (tool name to panel implementation)
//! - Window management (open, close, focus, z-order)
//! - Title bar drag state machine
//! - Session mode (login screen, desktop, shutdown screen)
//! - Start menu and menu bar toggles
//!
//! ## Architecture
//!
//! The engine is pure Rust with no browser dependencies. A view layer
//! renders the windows returned by [`DesktopEngine::window_views`] as
//! positioned overlays and forwards pointer events back in. Panel contents
//! (console, monitors, service lists) live in other crates and only see
//! window ids.
//!
//! - [`registry`]: Closed set of implemented tools
//! - [`window`]: Window entity store
//! - [`input`]: Drag gesture tracking
//! - [`session`]: Login/desktop/shutdown cycle
//! - [`chrome`]: Start menu and menu bar
//!
//! ## Example
//!
//! ```rust
//! use pn_desktop::{DesktopEngine, SessionMode};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//! engine.login("0000").unwrap();
//! assert_eq!(engine.mode(), SessionMode::Desktop);
//!
//! let id = engine.open_tool("Command Prompt").unwrap();
//! engine.start_move_drag(id, 60.0, 60.0);
//! engine.handle_pointer_move(160.0, 90.0);
//! engine.handle_pointer_up();
//! ```
//!
//! ## Time
//!
//! Nothing in this crate reads a clock. Timed transitions take the current
//! time as `now_ms`, so tests drive them deterministically.

pub mod chrome;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod registry;
pub mod session;
pub mod window;

mod engine;
mod types;

pub use chrome::{ChromeControls, ChromeTarget, Menu};
pub use config::ShellConfig;
pub use error::{Change, DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{Rect, Size, Vec2, FRAME_STYLE};
pub use registry::{
    resolve, DesktopIcon, Tool, ToolLayout, ToolLookup, DESKTOP_ICONS, MENU_TOOLS,
};
pub use session::{SessionMode, ShellSession};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowRegion, ZOrder};

pub use engine::{DesktopEngine, WindowView};
