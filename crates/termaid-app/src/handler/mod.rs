//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message mapping
//! - `command`: Command submission and execution results
//! - `chat`: Chat submission and analysis results
//! - `scroll`: Scroll handlers for the focused pane

pub(crate) mod chat;
pub(crate) mod command;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::chat_view::MessageId;
use crate::message::{AnalysisOrigin, Message, RequestId};

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// POST the command to `/execute` from the cwd captured at submission
    ExecuteCommand {
        request_id: RequestId,
        command: String,
        cwd: String,
    },

    /// POST text to `/analyze` and resolve the given placeholder
    Analyze {
        placeholder: MessageId,
        origin: AnalysisOrigin,
        text: String,
    },

    /// GET `/health`
    ProbeHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
