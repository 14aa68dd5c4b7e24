//! Start menu and menu bar toggles
//!
//! Both controls are plain open/closed flags dismissed by a pointer-down
//! anywhere outside them. They never touch windows themselves; choosing an
//! entry hands a request back to the engine.

use serde::{Deserialize, Serialize};

/// Dropdown menus in the menu bar. View and Help are inert labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Menu {
    /// Holds the Shutdown entry
    Manage,
    /// Lists `MENU_TOOLS`
    Tools,
}

/// Chrome element under a pointer-down, for click-outside dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeTarget {
    StartButton,
    StartMenu,
    MenuBar,
    /// Desktop, windows, taskbar tray, anything else
    Elsewhere,
}

/// Open/closed state of the start menu and menu bar
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeControls {
    start_menu_open: bool,
    open_menu: Option<Menu>,
}

impl ChromeControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open_menu
    }

    /// Close whatever the pointer-down landed outside of.
    ///
    /// The start button is excluded from the start menu's outside area so
    /// that its own click can toggle the menu closed.
    pub fn dismiss_outside(&mut self, target: ChromeTarget) {
        if !matches!(target, ChromeTarget::StartMenu | ChromeTarget::StartButton) {
            self.start_menu_open = false;
        }
        if target != ChromeTarget::MenuBar {
            self.open_menu = None;
        }
    }

    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Clicking a menu title opens it, or closes it if it is already open
    pub fn toggle_menu(&mut self, menu: Menu) {
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    /// Close the dropdown after an item was chosen
    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    /// Close everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
