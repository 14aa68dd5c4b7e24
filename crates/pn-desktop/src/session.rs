//! Shell session mode
//!
//! The session cycles `LoggedOut → Desktop → ShuttingDown → LoggedOut`.
//! Only `Desktop` shows the desktop and lets the window store change;
//! `ShuttingDown` is a timed screen that accepts no input and hands back to
//! the login screen once the delay has elapsed.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DesktopError, DesktopResult};

/// Message shown under the login box after a failed attempt
pub const LOGIN_ERROR_MESSAGE: &str = "Incorrect password.";

/// Current top-level screen of the shell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Login screen
    #[default]
    LoggedOut,
    /// Desktop with chrome and windows
    Desktop,
    /// Shutdown screen, waiting out the delay
    ShuttingDown,
}

impl SessionMode {
    pub fn is_desktop(&self) -> bool {
        matches!(self, SessionMode::Desktop)
    }
}

/// Session state machine
#[derive(Clone, Debug)]
pub struct ShellSession {
    mode: SessionMode,
    login_error: Option<String>,
    /// Start time (ms) of the pending shutdown
    shutdown_started: Option<f64>,
    shutdown_delay_ms: f64,
}

impl ShellSession {
    pub fn new(shutdown_delay_ms: f64) -> Self {
        Self {
            mode: SessionMode::LoggedOut,
            login_error: None,
            shutdown_started: None,
            shutdown_delay_ms,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Error from the last failed login, cleared on success
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Check `credential` against `secret` and enter the desktop on a match.
    ///
    /// A mismatch keeps the login screen up and records the error message.
    /// Attempts are not counted.
    pub fn login(&mut self, credential: &str, secret: &str) -> DesktopResult<()> {
        if self.mode != SessionMode::LoggedOut {
            return Err(DesktopError::InvalidOperation {
                op: "login",
                reason: "session is not at the login screen",
            });
        }

        if credential != secret {
            warn!("login rejected");
            self.login_error = Some(LOGIN_ERROR_MESSAGE.to_string());
            return Err(DesktopError::IncorrectPassword);
        }

        info!("login accepted");
        self.login_error = None;
        self.mode = SessionMode::Desktop;
        Ok(())
    }

    /// Leave the desktop for the shutdown screen
    pub fn begin_shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        if self.mode != SessionMode::Desktop {
            return Err(DesktopError::InvalidOperation {
                op: "shutdown",
                reason: "desktop is not active",
            });
        }

        info!(delay_ms = self.shutdown_delay_ms, "shutting down");
        self.mode = SessionMode::ShuttingDown;
        self.shutdown_started = Some(now_ms);
        Ok(())
    }

    /// Fraction of the shutdown delay elapsed, in `[0, 1]`
    pub fn shutdown_progress(&self, now_ms: f64) -> f32 {
        match self.shutdown_started {
            Some(start) if self.shutdown_delay_ms > 0.0 => {
                (((now_ms - start) / self.shutdown_delay_ms) as f32).clamp(0.0, 1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    /// Advance timed transitions.
    ///
    /// Returns true exactly once, on the tick that completes a shutdown and
    /// returns to the login screen.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.mode != SessionMode::ShuttingDown || self.shutdown_progress(now_ms) < 1.0 {
            return false;
        }

        info!("shutdown complete");
        self.mode = SessionMode::LoggedOut;
        self.shutdown_started = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_password_stays_logged_out() {
        let mut session = ShellSession::new(1500.0);
        let err = session.login("1234", "0000").unwrap_err();

        assert_eq!(err, DesktopError::IncorrectPassword);
        assert_eq!(session.mode(), SessionMode::LoggedOut);
        assert_eq!(session.login_error(), Some("Incorrect password."));

        // no lockout
        for _ in 0..10 {
            let _ = session.login("nope", "0000");
        }
        session.login("0000", "0000").unwrap();
        assert_eq!(session.mode(), SessionMode::Desktop);
        assert_eq!(session.login_error(), None);
    }

    #[test]
    fn test_login_only_from_login_screen() {
        let mut session = ShellSession::new(1500.0);
        session.login("0000", "0000").unwrap();
        assert!(matches!(
            session.login("0000", "0000"),
            Err(DesktopError::InvalidOperation { op: "login", .. })
        ));
    }

    #[test]
    fn test_shutdown_cycle() {
        let mut session = ShellSession::new(1500.0);
        assert!(session.begin_shutdown(0.0).is_err());

        session.login("0000", "0000").unwrap();
        session.begin_shutdown(1000.0).unwrap();
        assert_eq!(session.mode(), SessionMode::ShuttingDown);

        assert!(!session.tick(1500.0));
        assert!((session.shutdown_progress(1750.0) - 0.5).abs() < 0.001);
        assert!(!session.tick(2499.0));
        assert!(session.tick(2500.0));
        assert_eq!(session.mode(), SessionMode::LoggedOut);
        assert!(!session.tick(9000.0));
    }

    #[test]
    fn test_zero_delay_completes_on_next_tick() {
        let mut session = ShellSession::new(0.0);
        session.login("0000", "0000").unwrap();
        session.begin_shutdown(5.0).unwrap();
        assert!(session.tick(5.0));
    }
}
