//! Main update function - handles state transitions (TEA pattern)

use termaid_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{chat, command, keys, scroll, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message and/or an action for the event loop.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_busy() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = state.focus.toggled();
            UpdateResult::none()
        }

        Message::SubmitCommand => command::handle_submit_command(state),

        Message::SubmitChat => chat::handle_submit_chat(state),

        Message::NavigateHistory(direction) => {
            command::handle_navigate_history(state, direction)
        }

        Message::InputChar(c) => {
            state.focused_input_mut().insert(c);
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.focused_input_mut().backspace();
            UpdateResult::none()
        }
        Message::InputDelete => {
            state.focused_input_mut().delete();
            UpdateResult::none()
        }
        Message::InputLeft => {
            state.focused_input_mut().move_left();
            UpdateResult::none()
        }
        Message::InputRight => {
            state.focused_input_mut().move_right();
            UpdateResult::none()
        }
        Message::InputHome => {
            state.focused_input_mut().move_home();
            UpdateResult::none()
        }
        Message::InputEnd => {
            state.focused_input_mut().move_end();
            UpdateResult::none()
        }
        Message::InputClear => {
            state.focused_input_mut().clear();
            UpdateResult::none()
        }
        Message::Paste(text) => {
            state.focused_input_mut().insert_str(&text);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Views
        // ─────────────────────────────────────────────────────────
        Message::ClearTerminal => {
            state.terminal.clear();
            UpdateResult::none()
        }

        Message::ClearChat => {
            state.chat.reset();
            UpdateResult::none()
        }

        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Backend completions
        // ─────────────────────────────────────────────────────────
        Message::CommandCompleted {
            request_id,
            command,
            result,
        } => command::handle_command_completed(state, request_id, &command, result),

        Message::AnalysisCompleted {
            placeholder,
            origin,
            outcome,
        } => chat::handle_analysis_completed(state, placeholder, origin, outcome),

        Message::CheckHealth => UpdateResult::action(UpdateAction::ProbeHealth),

        Message::HealthChecked(status) => {
            if status != state.connectivity {
                if status.is_connected() {
                    info!("Backend connectivity: {}", status);
                } else {
                    warn!("Backend connectivity: {}", status);
                }
            }
            state.connectivity = status;
            UpdateResult::none()
        }
    }
}
