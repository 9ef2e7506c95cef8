//! Application state (Model in TEA pattern)

use termaid_core::ConnectivityStatus;

use crate::chat_view::ChatView;
use crate::config::Settings;
use crate::history::CommandHistory;
use crate::line_input::LineInput;
use crate::message::{Focus, RequestId};
use crate::terminal_view::TerminalView;

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete session state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Directory sent with every execution; updated only by successful `cd`
    pub cwd: String,

    pub history: CommandHistory,

    pub terminal: TerminalView,

    pub chat: ChatView,

    pub command_input: LineInput,

    pub chat_input: LineInput,

    pub focus: Focus,

    pub connectivity: ConnectivityStatus,

    /// Executions sent but not yet completed
    pub pending_commands: usize,

    /// Spinner frame, advanced on every tick
    pub animation_frame: usize,

    next_request_id: u64,
}

impl AppState {
    pub fn new(settings: Settings, cwd: impl Into<String>) -> Self {
        let history = CommandHistory::with_limit(settings.ui.history_limit);
        Self {
            phase: AppPhase::Running,
            settings,
            cwd: cwd.into(),
            history,
            terminal: TerminalView::new(),
            chat: ChatView::new(),
            command_input: LineInput::new(),
            chat_input: LineInput::new(),
            focus: Focus::Terminal,
            connectivity: ConnectivityStatus::Unknown,
            pending_commands: 0,
            animation_frame: 0,
            next_request_id: 1,
        }
    }

    /// Allocate the next execution id
    pub fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        id
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether any backend request is still in flight
    pub fn is_busy(&self) -> bool {
        self.pending_commands > 0 || self.chat.has_pending()
    }

    /// The input line that currently receives keystrokes
    pub fn focused_input_mut(&mut self) -> &mut LineInput {
        match self.focus {
            Focus::Terminal => &mut self.command_input,
            Focus::Chat => &mut self.chat_input,
        }
    }
}
