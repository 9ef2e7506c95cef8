//! Message types for the application (TEA pattern)

use std::fmt;

use termaid_client::ExecutionResult;
use termaid_core::ConnectivityStatus;

use crate::chat_view::MessageId;
use crate::history::HistoryDirection;
use crate::input_key::InputKey;

/// Monotonic id stamped on each command execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why an analysis was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOrigin {
    /// Automatic, after a command produced an error result
    ErrorOutput,
    /// The user asked something in the chat
    Chat,
}

impl AnalysisOrigin {
    /// Caption shown on the loading placeholder
    pub fn caption(&self) -> &'static str {
        match self {
            AnalysisOrigin::ErrorOutput => "Analyzing error...",
            AnalysisOrigin::Chat => "Thinking...",
        }
    }

    /// Assistant reply when the analysis service fails
    pub fn apology(&self) -> &'static str {
        match self {
            AnalysisOrigin::ErrorOutput => {
                "Sorry, I couldn't analyze the error. Please check if the backend is running."
            }
            AnalysisOrigin::Chat => {
                "Sorry, I couldn't process your message. Please check if the backend is running."
            }
        }
    }
}

/// Which input line receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Terminal,
    Chat,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Terminal => Focus::Chat,
            Focus::Chat => Focus::Terminal,
        }
    }
}

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick (drives the loading spinner)
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────
    /// Swap keyboard focus between the terminal and chat inputs
    ToggleFocus,

    /// Run the text in the terminal input
    SubmitCommand,

    /// Send the text in the chat input
    SubmitChat,

    /// Recall a command from history into the terminal input
    NavigateHistory(HistoryDirection),

    /// Edit the focused input line
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    InputClear,

    /// Pasted text for the focused input line
    Paste(String),

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────
    ClearTerminal,
    ClearChat,

    /// Scroll the focused pane
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Backend completions
    // ─────────────────────────────────────────────────────────
    /// An `/execute` request finished (successfully or not)
    CommandCompleted {
        request_id: RequestId,
        command: String,
        result: ExecutionResult,
    },

    /// An `/analyze` request finished; `Err` carries the failure reason
    AnalysisCompleted {
        placeholder: MessageId,
        origin: AnalysisOrigin,
        outcome: Result<String, String>,
    },

    /// Ask for a fresh `/health` probe
    CheckHealth,

    /// A `/health` probe finished
    HealthChecked(ConnectivityStatus),
}
