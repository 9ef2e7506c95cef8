//! Main render/view function (View in TEA pattern)

use ratatui::{style::Style, widgets::Block, Frame};

use termaid_app::{AppState, Focus};

use crate::theme::palette;
use crate::{layout, widgets};

#[cfg(test)]
mod tests;

/// Render the complete UI (View function in TEA)
///
/// Only scroll state is written back, recording content size for the
/// scroll handlers.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let spinner = widgets::spinner_frame(state.animation_frame);

    let header = widgets::MainHeader::new(&state.cwd, state.connectivity)
        .with_server(&state.settings.server.base_url);
    frame.render_widget(header, areas.header);

    let terminal_focused = state.focus == Focus::Terminal;
    let running = (state.pending_commands > 0).then_some(spinner);
    {
        let (lines, scroll) = state.terminal.render_parts();
        let pane = widgets::TerminalPane::new(lines, &state.cwd, &state.command_input)
            .focused(terminal_focused)
            .busy(running);
        frame.render_stateful_widget(pane, areas.terminal, scroll);
    }

    {
        let (messages, scroll) = state.chat.render_parts();
        let pane = widgets::ChatPane::new(messages, &state.chat_input)
            .focused(!terminal_focused)
            .spinner(spinner);
        frame.render_stateful_widget(pane, areas.chat, scroll);
    }

    let hints = widgets::KeyHints::new(state.focus).running(state.pending_commands, spinner);
    frame.render_widget(hints, areas.footer);

    let cursor = match state.focus {
        Focus::Terminal => widgets::terminal_cursor_position(
            areas.terminal,
            &state.terminal.scroll,
            &state.cwd,
            &state.command_input,
        ),
        Focus::Chat => widgets::chat_cursor_position(areas.chat, &state.chat_input),
    };
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
