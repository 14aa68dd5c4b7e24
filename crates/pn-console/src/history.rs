//! Submitted-line recall
//!
//! Entries are stored newest first. The cursor starts below the newest
//! entry (an empty input line); `previous` walks toward older entries and
//! stops at the oldest, `next` walks back and falls off into the empty line.

/// Command history with an arrow-key cursor
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor. Empty lines are not kept.
    pub fn push(&mut self, line: &str) {
        if !line.is_empty() {
            self.entries.insert(0, line.to_string());
        }
        self.cursor = None;
    }

    /// Arrow up: the next older entry, clamped at the oldest.
    /// `None` when there is no history at all.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            Some(i) => (i + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.cursor = Some(index);
        Some(&self.entries[index])
    }

    /// Arrow down: the next newer entry, or `None` (empty input line) once
    /// past the newest.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                Some(&self.entries[i - 1])
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
