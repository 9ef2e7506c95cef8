//! Key event handlers

use crate::history::HistoryDirection;
use crate::input_key::InputKey;
use crate::message::{Focus, Message};
use crate::state::AppState;

/// Convert a key event into a message for the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_global_key(key) {
        return Some(msg);
    }

    match state.focus {
        Focus::Terminal => handle_key_terminal(key),
        Focus::Chat => handle_key_chat(key),
    }
}

/// Keys that behave the same whichever pane has focus
fn handle_global_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('l') => Some(Message::ClearTerminal),
        InputKey::CharCtrl('k') => Some(Message::ClearChat),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::CharCtrl('e') => Some(Message::ScrollToBottom),
        key if key.is_editing() => editing_message(key),
        _ => None,
    }
}

fn handle_key_terminal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitCommand),
        InputKey::Up => Some(Message::NavigateHistory(HistoryDirection::Older)),
        InputKey::Down => Some(Message::NavigateHistory(HistoryDirection::Newer)),
        _ => None,
    }
}

fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitChat),
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        _ => None,
    }
}

fn editing_message(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Delete => Some(Message::InputDelete),
        InputKey::Left => Some(Message::InputLeft),
        InputKey::Right => Some(Message::InputRight),
        InputKey::Home => Some(Message::InputHome),
        InputKey::End => Some(Message::InputEnd),
        _ => None,
    }
}
