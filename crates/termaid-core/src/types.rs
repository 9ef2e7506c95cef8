//! Core domain type definitions

use chrono::{DateTime, Local};

// ─────────────────────────────────────────────────────────────────────────────
// Terminal lines
// ─────────────────────────────────────────────────────────────────────────────

/// A single rendered line in the terminal pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLine {
    /// Echo of a submitted command, with the prompt captured when it was added
    Command { prompt: String, text: String },
    /// Successful command output
    Output(String),
    /// Failed command output or transport fault
    Error(String),
    /// The live prompt line; always last, exactly once
    CursorPlaceholder,
}

impl TerminalLine {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TerminalLine::CursorPlaceholder)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TerminalLine::Error(_))
    }

    /// Text content of the line (empty for the placeholder)
    pub fn text(&self) -> &str {
        match self {
            TerminalLine::Command { text, .. } => text,
            TerminalLine::Output(text) | TerminalLine::Error(text) => text,
            TerminalLine::CursorPlaceholder => "",
        }
    }
}

/// Kind of result line produced by an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Output,
    Error,
}

impl ResultKind {
    pub fn into_line(self, text: String) -> TerminalLine {
        match self {
            ResultKind::Output => TerminalLine::Output(text),
            ResultKind::Error => TerminalLine::Error(text),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat messages
// ─────────────────────────────────────────────────────────────────────────────

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Avatar glyph shown next to the message
    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::User => "👤",
            Sender::Assistant => "🤖",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
        }
    }
}

/// A single entry in the chat pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    /// Message text; for placeholders, the caption shown beside the indicator
    pub content: String,
    pub is_placeholder: bool,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            is_placeholder: false,
            sent_at: Local::now(),
        }
    }

    pub fn placeholder(sender: Sender, caption: impl Into<String>) -> Self {
        Self {
            is_placeholder: true,
            ..Self::new(sender, caption)
        }
    }

    /// Format the timestamp for display (HH:MM)
    pub fn formatted_time(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Connectivity
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of the last health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityStatus {
    /// No probe has completed yet
    #[default]
    Unknown,
    /// Reachable and answered with a success status
    Connected,
    /// Reachable but answered with a non-success status
    ServerError,
    /// Unreachable or transport fault
    Disconnected,
}

impl ConnectivityStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityStatus::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityStatus::Unknown => "Connecting...",
            ConnectivityStatus::Connected => "Connected",
            ConnectivityStatus::ServerError => "Server Error",
            ConnectivityStatus::Disconnected => "Disconnected",
        }
    }
}

impl std::fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
