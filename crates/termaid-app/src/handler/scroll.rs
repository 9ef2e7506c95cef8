//! Scroll message handlers
//!
//! Scrolling always applies to the pane whose input has focus.

use crate::message::Focus;
use crate::scroll_state::ScrollState;
use crate::state::AppState;

use super::UpdateResult;

fn focused_scroll(state: &mut AppState) -> &mut ScrollState {
    match state.focus {
        Focus::Terminal => &mut state.terminal.scroll,
        Focus::Chat => &mut state.chat.scroll,
    }
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    focused_scroll(state).scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    focused_scroll(state).scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    focused_scroll(state).page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    focused_scroll(state).page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    focused_scroll(state).scroll_to_bottom();
    UpdateResult::none()
}
