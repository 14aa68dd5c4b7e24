//! One Command Prompt window's state

use chrono::NaiveDateTime;
use rand::RngCore;
use tracing::debug;

use crate::commands::{execute, CommandContext, CommandOutput, PROMPT, VERSION_LINE};
use crate::history::CommandHistory;

/// Lines shown when a prompt window opens
pub const BANNER: [&str; 3] = [
    VERSION_LINE,
    "(c) Paskanet Corporation. All rights reserved.",
    "",
];

/// What the host should do after a line was submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Keep the window open
    Continue,
    /// `exit` was entered: close this console's window
    Exit,
}

/// Transcript and history of one prompt window
#[derive(Clone, Debug)]
pub struct Console {
    transcript: Vec<String>,
    history: CommandHistory,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            transcript: BANNER.iter().map(|s| s.to_string()).collect(),
            history: CommandHistory::new(),
        }
    }

    /// Lines printed so far
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Arrow-up recall. `None` means leave the input line as it is.
    pub fn history_up(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    /// Arrow-down recall. `None` means clear the input line.
    pub fn history_down(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    /// Enter pressed: remember the line, then run it
    pub fn submit(
        &mut self,
        line: &str,
        now: NaiveDateTime,
        rng: &mut dyn RngCore,
    ) -> ConsoleAction {
        self.history.push(line);
        let mut ctx = CommandContext { now, rng };
        self.apply(line, execute(line, &mut ctx))
    }

    fn apply(&mut self, line: &str, output: CommandOutput) -> ConsoleAction {
        match output {
            CommandOutput::ClearScreen => {
                self.transcript.clear();
            }
            CommandOutput::Exit => {
                debug!("console exit requested");
                return ConsoleAction::Exit;
            }
            CommandOutput::Lines(body) => {
                self.transcript.push(format!("{} {}", PROMPT, line));
                self.transcript.extend(body);
                self.transcript.push(String::new());
            }
        }
        ConsoleAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_banner() {
        let console = Console::new();
        assert_eq!(console.transcript()[0], "Paskanet II [Version 2.1.0]");
        assert_eq!(console.transcript().len(), 3);
    }

    #[test]
    fn test_submit_appends_prompt_body_blank() {
        let mut console = Console::new();
        let mut rng = StdRng::seed_from_u64(1);

        let action = console.submit("echo hello world", now(), &mut rng);
        assert_eq!(action, ConsoleAction::Continue);
        assert_eq!(
            &console.transcript()[3..],
            &["P:\\> echo hello world", "hello world", ""]
        );
    }

    #[test]
    fn test_empty_line_prints_prompt_only() {
        let mut console = Console::new();
        let mut rng = StdRng::seed_from_u64(1);

        console.submit("", now(), &mut rng);
        assert_eq!(&console.transcript()[3..], &["P:\\> ", ""]);
        assert!(console.history().is_empty());
    }

    #[test]
    fn test_cls_clears_everything() {
        let mut console = Console::new();
        let mut rng = StdRng::seed_from_u64(1);

        console.submit("ver", now(), &mut rng);
        console.submit("cls", now(), &mut rng);
        assert!(console.transcript().is_empty());
        assert_eq!(console.history_up().as_deref(), Some("cls"));
    }

    #[test]
    fn test_exit_appends_nothing() {
        let mut console = Console::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(console.submit("exit", now(), &mut rng), ConsoleAction::Exit);
        assert_eq!(console.transcript().len(), 3);
    }
}
