//! Error types for the desktop
//!
//! Stale window ids are not errors: store operations report them as
//! [`Change::Unchanged`] inside `Ok`. Only rejected user input, unresolvable
//! tool requests, and operations attempted in the wrong session mode surface
//! as [`DesktopError`].

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// The requested tool name has no panel implementation
    ToolNotAvailable(String),

    /// The submitted credential did not match
    IncorrectPassword,

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToolNotAvailable(name) => write!(f, "Tool \"{}\" is not available.", name),
            Self::IncorrectPassword => write!(f, "Incorrect password."),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

/// Outcome of a store mutation.
///
/// Operations addressing a window that no longer exists are absorbed as
/// `Unchanged`: UI callbacks may still fire for a window a previous event
/// already closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// State was modified
    Applied,
    /// Nothing to do (missing id, already on top, wrong mode)
    Unchanged,
}

impl Change {
    /// Whether the operation modified state
    pub fn is_applied(self) -> bool {
        matches!(self, Change::Applied)
    }
}

impl From<bool> for Change {
    fn from(applied: bool) -> Self {
        if applied {
            Change::Applied
        } else {
            Change::Unchanged
        }
    }
}
