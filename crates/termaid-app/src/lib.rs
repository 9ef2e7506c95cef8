//! termaid-app - Session state and orchestration for termaid
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the terminal
//! and chat panes, command history and working directory live in
//! [`AppState`]; [`handler::update`] applies [`Message`]s and returns
//! [`UpdateAction`]s, which [`actions::handle_action`] turns into backend calls
//! on background tasks.

pub mod actions;
pub mod chat_view;
pub mod config;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod line_input;
pub mod message;
pub mod process;
pub mod scroll_state;
pub mod signals;
pub mod state;
pub mod terminal_view;

// Re-export primary types
pub use chat_view::{ChatView, MessageId, GREETING};
pub use handler::{UpdateAction, UpdateResult};
pub use history::{CommandHistory, HistoryDirection, HistoryStep};
pub use input_key::InputKey;
pub use line_input::LineInput;
pub use message::{AnalysisOrigin, Focus, Message, RequestId};
pub use scroll_state::ScrollState;
pub use state::{AppPhase, AppState};
pub use terminal_view::TerminalView;
