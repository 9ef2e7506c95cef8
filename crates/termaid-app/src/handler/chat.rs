//! Chat submission and analysis results

use termaid_core::prelude::*;
use termaid_core::Sender;

use crate::chat_view::MessageId;
use crate::message::AnalysisOrigin;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Handle Enter in the chat input
pub fn handle_submit_chat(state: &mut AppState) -> UpdateResult {
    if state.chat_input.text().trim().is_empty() {
        return UpdateResult::none();
    }
    let text = state.chat_input.take().trim().to_string();

    state.chat.append(Sender::User, text.clone());

    begin_analysis(state, AnalysisOrigin::Chat, text)
}

/// Show a loading placeholder and request an analysis of `text`
pub(crate) fn begin_analysis(
    state: &mut AppState,
    origin: AnalysisOrigin,
    text: String,
) -> UpdateResult {
    let placeholder = state
        .chat
        .append_placeholder(Sender::Assistant, origin.caption());
    debug!(
        "Requesting analysis ({:?}) for placeholder #{}",
        origin,
        placeholder.value()
    );

    UpdateResult::action(UpdateAction::Analyze {
        placeholder,
        origin,
        text,
    })
}

/// Replace the placeholder with the suggestion, or with an apology on failure
pub fn handle_analysis_completed(
    state: &mut AppState,
    placeholder: MessageId,
    origin: AnalysisOrigin,
    outcome: std::result::Result<String, String>,
) -> UpdateResult {
    state.chat.remove(placeholder);

    match outcome {
        Ok(suggestion) => {
            state.chat.append(Sender::Assistant, suggestion);
        }
        Err(reason) => {
            warn!("Analysis failed: {}", reason);
            state.chat.append(Sender::Assistant, origin.apology());
        }
    }

    UpdateResult::none()
}
