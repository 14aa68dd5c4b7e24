//! Shell configuration
//!
//! Every field has a default matching the stock Paskanet II shell, so a
//! partial JSON document only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::{Size, Vec2};

/// Configuration for one running shell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shared secret checked at the login screen
    pub password: String,
    /// How long the shutdown screen stays up before returning to login
    pub shutdown_delay_ms: f64,
    /// Initial screen size, replaced by `DesktopEngine::init`
    pub screen_size: Size,
    /// Size of every standard tool window
    pub default_window_size: Size,
    /// Margin subtracted from the screen for near-fullscreen tools
    pub fullscreen_margin: Size,
    /// Top-left corner of near-fullscreen tools
    pub fullscreen_origin: Vec2,
    /// Top-left corner of the first cascaded window
    pub cascade_origin: Vec2,
    /// Per-window diagonal offset of the cascade
    pub cascade_step: f32,
    /// Number of cascade slots before wrapping back to the origin
    pub cascade_period: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            password: "0000".to_string(),
            shutdown_delay_ms: 1500.0,
            screen_size: Size::new(1920.0, 1080.0),
            default_window_size: Size::new(640.0, 480.0),
            fullscreen_margin: Size::new(100.0, 150.0),
            fullscreen_origin: Vec2::new(50.0, 40.0),
            cascade_origin: Vec2::new(50.0, 50.0),
            cascade_step: 20.0,
            cascade_period: 10,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration document
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cascade position for a newly assigned window id
    pub fn cascade_position(&self, id: u64) -> Vec2 {
        let slot = id % self.cascade_period.max(1);
        self.cascade_origin.splat_offset(slot as f32 * self.cascade_step)
    }
}
