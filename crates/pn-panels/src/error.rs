//! Error types for panel actions

/// Errors from panel button actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// No service with this name in the list
    UnknownService(String),

    /// The button for this action is disabled in the current state
    ActionUnavailable {
        /// The action that was attempted
        action: &'static str,
        /// Why the button is disabled
        reason: &'static str,
    },
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownService(name) => write!(f, "unknown service: {}", name),
            Self::ActionUnavailable { action, reason } => {
                write!(f, "'{}' unavailable: {}", action, reason)
            }
        }
    }
}

impl std::error::Error for PanelError {}

/// Result type alias for panel actions
pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::UnknownService("Fax".to_string());
        assert_eq!(err.to_string(), "unknown service: Fax");

        let err = PanelError::ActionUnavailable {
            action: "optimize",
            reason: "all drives are OK",
        };
        assert_eq!(err.to_string(), "'optimize' unavailable: all drives are OK");
    }
}
