//! Panel registry
//!
//! Maps a tool's display name to the panel implementation responsible for
//! its body. The registry is partial: the Tools menu advertises more names
//! than there are panels, and those extra names resolve to
//! [`ToolLookup::Unsupported`].

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};

/// Tools advertised in the menu bar's Tools dropdown, in display order
pub const MENU_TOOLS: [&str; 19] = [
    "Command Prompt",
    "Component Services",
    "Computer Management",
    "Defragment and Optimize Drives",
    "Disk Cleanup",
    "DNS",
    "Event Viewer",
    "File Explorer",
    "Group Policy Management",
    "iSCSI Initiator",
    "Local Security Policy",
    "Performance Monitor",
    "Print Management",
    "Resource Monitor",
    "Services",
    "System Configuration",
    "System Information",
    "Task Scheduler",
    "Windows Memory Diagnostic",
];

/// Icon shown on the desktop surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DesktopIcon {
    /// Label under the icon, also the tool name it opens
    pub name: &'static str,
    /// Icon sprite name for the view layer
    pub icon: &'static str,
}

/// Icons on the desktop surface
pub const DESKTOP_ICONS: [DesktopIcon; 1] = [DesktopIcon {
    name: "Server Manager",
    icon: "server-manager",
}];

/// Tools that have a panel implementation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    CommandPrompt,
    ServerManager,
    PerformanceMonitor,
    ResourceMonitor,
    Services,
    EventViewer,
    DiskCleanup,
    DefragmentAndOptimizeDrives,
}

/// How a tool's window is sized on open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolLayout {
    /// The configured default window size
    Standard,
    /// Screen size minus the configured margin
    NearFullscreen,
}

impl Tool {
    /// Get all tools with a panel implementation
    pub fn all() -> &'static [Tool] {
        &[
            Tool::CommandPrompt,
            Tool::ServerManager,
            Tool::PerformanceMonitor,
            Tool::ResourceMonitor,
            Tool::Services,
            Tool::EventViewer,
            Tool::DiskCleanup,
            Tool::DefragmentAndOptimizeDrives,
        ]
    }

    /// Registry key, as shown in menus and on desktop icons
    pub fn name(&self) -> &'static str {
        match self {
            Tool::CommandPrompt => "Command Prompt",
            Tool::ServerManager => "Server Manager",
            Tool::PerformanceMonitor => "Performance Monitor",
            Tool::ResourceMonitor => "Resource Monitor",
            Tool::Services => "Services",
            Tool::EventViewer => "Event Viewer",
            Tool::DiskCleanup => "Disk Cleanup",
            Tool::DefragmentAndOptimizeDrives => "Defragment and Optimize Drives",
        }
    }

    /// Text shown in the window's title bar
    pub fn title(&self) -> &'static str {
        match self {
            Tool::CommandPrompt => "Paskanet II Command Prompt",
            Tool::DiskCleanup => "Disk Cleanup (C:)",
            Tool::DefragmentAndOptimizeDrives => "Optimize Drives",
            other => other.name(),
        }
    }

    pub fn layout(&self) -> ToolLayout {
        match self {
            Tool::ServerManager => ToolLayout::NearFullscreen,
            _ => ToolLayout::Standard,
        }
    }

    /// Look a tool up by its exact registry key
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::all().iter().copied().find(|tool| tool.name() == name)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of resolving a requested tool name
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolLookup {
    Found(Tool),
    /// Name is unknown or advertised without an implementation
    Unsupported(String),
}

impl ToolLookup {
    pub fn into_result(self) -> DesktopResult<Tool> {
        match self {
            ToolLookup::Found(tool) => Ok(tool),
            ToolLookup::Unsupported(name) => Err(DesktopError::ToolNotAvailable(name)),
        }
    }
}

/// Resolve a requested tool name. Pure and total.
pub fn resolve(name: &str) -> ToolLookup {
    match Tool::from_name(name) {
        Some(tool) => ToolLookup::Found(tool),
        None => ToolLookup::Unsupported(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tools() {
        for tool in Tool::all() {
            assert_eq!(resolve(tool.name()), ToolLookup::Found(*tool));
        }
    }

    #[test]
    fn test_registry_is_partial() {
        let supported: Vec<_> = MENU_TOOLS
            .iter()
            .filter(|name| matches!(resolve(name), ToolLookup::Found(_)))
            .collect();
        // Server Manager is reachable from the desktop icon, not the menu
        assert_eq!(supported.len(), Tool::all().len() - 1);

        assert_eq!(resolve("DNS"), ToolLookup::Unsupported("DNS".to_string()));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(matches!(resolve("services"), ToolLookup::Unsupported(_)));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(resolve("Services").into_result(), Ok(Tool::Services));
        assert_eq!(
            resolve("Task Scheduler").into_result(),
            Err(DesktopError::ToolNotAvailable("Task Scheduler".to_string()))
        );
    }

    #[test]
    fn test_titles_and_layout() {
        assert_eq!(Tool::CommandPrompt.title(), "Paskanet II Command Prompt");
        assert_eq!(Tool::EventViewer.title(), "Event Viewer");
        assert_eq!(Tool::ServerManager.layout(), ToolLayout::NearFullscreen);
        assert_eq!(Tool::Services.layout(), ToolLayout::Standard);
    }

    #[test]
    fn test_desktop_icons_resolve() {
        for icon in DESKTOP_ICONS {
            assert!(matches!(resolve(icon.name), ToolLookup::Found(_)));
        }
    }
}
