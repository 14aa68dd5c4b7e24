//! Core type definitions for the desktop
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Window IDs are never reused within a `DesktopEngine` instance, not even
/// after a shutdown clears every open window.
pub type WindowId = u64;

/// Stacking rank of a window. Higher ranks paint on top.
pub type ZOrder = u32;
