//! Command Prompt for the Paskanet II shell
//!
//! A line goes in, display lines come out. The interpreter knows a fixed
//! set of verbs; each is a pure formatter over its arguments plus the
//! current time and a random source supplied by the caller.
//!
//! - [`commands`]: Verb table and formatting
//! - [`history`]: Up/down recall of submitted lines
//! - [`Console`]: Transcript plus history for one open prompt window

pub mod commands;
pub mod history;

mod console;

pub use commands::{execute, CommandContext, CommandOutput, PROMPT};
pub use console::{Console, ConsoleAction, BANNER};
pub use history::CommandHistory;
