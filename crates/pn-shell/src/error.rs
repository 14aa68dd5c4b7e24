//! Error types for the composed shell

use pn_desktop::{DesktopError, WindowId};
use pn_panels::PanelError;

/// Errors from shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Rejected by the desktop engine
    Desktop(DesktopError),

    /// Rejected by a tool panel
    Panel(PanelError),

    /// Command sent to a window whose panel does not understand it
    WrongPanel {
        /// Target window
        id: WindowId,
        /// The command that was sent
        command: &'static str,
    },
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Desktop(err) => write!(f, "{}", err),
            Self::Panel(err) => write!(f, "{}", err),
            Self::WrongPanel { id, command } => {
                write!(f, "window {} does not accept '{}'", id, command)
            }
        }
    }
}

impl std::error::Error for ShellError {}

impl From<DesktopError> for ShellError {
    fn from(err: DesktopError) -> Self {
        Self::Desktop(err)
    }
}

impl From<PanelError> for ShellError {
    fn from(err: PanelError) -> Self {
        Self::Panel(err)
    }
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: ShellError = DesktopError::ToolNotAvailable("DNS".to_string()).into();
        assert_eq!(err.to_string(), "Tool \"DNS\" is not available.");

        let err = ShellError::WrongPanel {
            id: 3,
            command: "scan",
        };
        assert_eq!(err.to_string(), "window 3 does not accept 'scan'");
    }
}
