//! Paskanet II shell
//!
//! Composes the window manager in `pn-desktop` with the tool panels of
//! `pn-console` and `pn-panels`. A [`Shell`] owns one panel host per open
//! window; closing the window (by its close button, the console's `exit`,
//! or shutdown) drops the host and with it any running feed.
//!
//! ```rust
//! use pn_desktop::ShellConfig;
//! use pn_shell::Shell;
//!
//! let mut shell = Shell::new(ShellConfig::default(), 1);
//! shell.init(1280.0, 800.0);
//! shell.login("0000").unwrap();
//!
//! let id = shell.open_tool("Event Viewer", 0.0).unwrap();
//! assert!(shell.panel(id).is_some());
//! assert_eq!(shell.snapshot().windows.len(), 1);
//! ```

pub mod error;
pub mod host;

mod shell;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use error::{ShellError, ShellResult};
pub use host::{
    DriveRow, EventRow, PanelCommand, PanelHost, PanelView, ServerGroupView, ServerRow,
};
pub use shell::{Shell, ShellSnapshot, ShellWindow};
