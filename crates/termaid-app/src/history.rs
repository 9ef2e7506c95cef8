//! Command history with Up/Down recall.
//!
//! The navigation index ranges over `0..=len`; `len` is the blank slot past
//! the newest entry. Every push resets the index to that slot.

use std::fmt;

/// Which way to walk through history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Toward earlier commands (Up)
    Older,
    /// Toward later commands (Down)
    Newer,
}

impl fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryDirection::Older => write!(f, "older"),
            HistoryDirection::Newer => write!(f, "newer"),
        }
    }
}

/// What a navigation step landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// A recorded command to show in the input
    Entry(String),
    /// The slot past the newest entry; the input should be blank
    Blank,
    /// Nothing recorded yet; the input is left alone
    Empty,
}

/// Ordered record of submitted commands, oldest first
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    index: usize,
    /// Maximum entries kept (0 = unbounded)
    limit: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops its oldest entries beyond `limit` (0 = unbounded)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record a command and reset navigation to the blank slot
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        if self.limit > 0 && self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len();
    }

    /// Move the cursor one step and report what it landed on.
    ///
    /// `Older` clamps at the oldest entry, `Newer` clamps at the blank slot.
    pub fn navigate(&mut self, direction: HistoryDirection) -> HistoryStep {
        if self.entries.is_empty() {
            return HistoryStep::Empty;
        }

        self.index = match direction {
            HistoryDirection::Older => self.index.saturating_sub(1),
            HistoryDirection::Newer => (self.index + 1).min(self.entries.len()),
        };

        match self.entries.get(self.index) {
            Some(entry) => HistoryStep::Entry(entry.clone()),
            None => HistoryStep::Blank,
        }
    }

    /// Current navigation index
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
