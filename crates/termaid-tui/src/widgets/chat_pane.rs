//! Chat pane widget
//!
//! Message list on top, a separator, and the chat input row at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use termaid_app::{LineInput, ScrollState};
use termaid_core::ChatMessage;

use crate::theme::{palette, styles};

use super::wrap_text;

/// Indent for message bodies, below the avatar
const BODY_INDENT: &str = "   ";

/// Prefix for the input row
const INPUT_PROMPT: &str = "> ";

/// Rows reserved under the message list (separator + input)
const INPUT_ROWS: u16 = 2;

pub struct ChatPane<'a> {
    messages: Vec<&'a ChatMessage>,
    input: &'a LineInput,
    focused: bool,
    spinner: &'static str,
}

impl<'a> ChatPane<'a> {
    pub fn new(messages: Vec<&'a ChatMessage>, input: &'a LineInput) -> Self {
        Self {
            messages,
            input,
            focused: false,
            spinner: "…",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Glyph drawn beside placeholder captions
    pub fn spinner(mut self, spinner: &'static str) -> Self {
        self.spinner = spinner;
        self
    }

    fn build_rows(&self, width: usize) -> Vec<Line<'a>> {
        let body_width = width.saturating_sub(BODY_INDENT.len()).max(1);
        let mut rows = Vec::new();

        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                rows.push(Line::default());
            }

            rows.push(Line::from(vec![
                Span::raw(message.sender.avatar()),
                Span::raw(" "),
                Span::styled(message.sender.label(), styles::sender_name(message.sender)),
                Span::raw("  "),
                Span::styled(message.formatted_time(), styles::text_muted()),
            ]));

            if message.is_placeholder {
                rows.push(Line::from(vec![
                    Span::raw(BODY_INDENT),
                    Span::styled(self.spinner, styles::accent()),
                    Span::raw(" "),
                    Span::styled(message.content.clone(), styles::placeholder_text()),
                ]));
                continue;
            }

            for row in wrap_text(&message.content, body_width) {
                rows.push(Line::from(vec![
                    Span::raw(BODY_INDENT),
                    Span::styled(row, styles::text_primary()),
                ]));
            }
        }

        rows
    }
}

fn split(inner: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner)
}

impl StatefulWidget for ChatPane<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" AI Assistant ", styles::accent()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height <= INPUT_ROWS || inner.width == 0 {
            return;
        }

        let [list_area, separator_area, input_area] = split(inner);

        let rows = self.build_rows(list_area.width as usize);
        state.update_content_size(rows.len(), list_area.height as usize);
        let visible: Vec<Line> = rows
            .into_iter()
            .skip(state.offset)
            .take(list_area.height as usize)
            .collect();
        Paragraph::new(visible).render(list_area, buf);

        let separator = "─".repeat(separator_area.width as usize);
        buf.set_string(
            separator_area.x,
            separator_area.y,
            separator,
            styles::border_inactive(),
        );

        let input_line = if self.input.is_empty() && !self.focused {
            Line::from(vec![
                Span::styled(INPUT_PROMPT, styles::accent_bold()),
                Span::styled("Ask a question...", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled(INPUT_PROMPT, styles::accent_bold()),
                Span::styled(self.input.text(), styles::text_primary()),
            ])
        };
        Paragraph::new(input_line).render(input_area, buf);
    }
}

/// Cursor position inside the chat input row
pub fn cursor_position(area: Rect, input: &LineInput) -> Option<Position> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height <= INPUT_ROWS || inner.width == 0 {
        return None;
    }
    let [_, _, input_area] = split(inner);

    let before_cursor: String = input.text().chars().take(input.cursor()).collect();
    let column = INPUT_PROMPT.width() + before_cursor.width();
    let x = input_area.x + (column as u16).min(input_area.width - 1);
    Some(Position::new(x, input_area.y))
}
