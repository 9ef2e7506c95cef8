//! Footer bar with key bindings and the running-command count

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use termaid_app::Focus;

use crate::theme::{palette, styles};

pub struct KeyHints {
    focus: Focus,
    running: usize,
    spinner: &'static str,
}

impl KeyHints {
    pub fn new(focus: Focus) -> Self {
        Self {
            focus,
            running: 0,
            spinner: "",
        }
    }

    /// Commands still waiting on the backend
    pub fn running(mut self, count: usize, spinner: &'static str) -> Self {
        self.running = count;
        self.spinner = spinner;
        self
    }

    fn bindings(&self) -> [(&'static str, &'static str); 6] {
        let arrows = match self.focus {
            Focus::Terminal => "History",
            Focus::Chat => "Scroll",
        };
        [
            ("Tab", "Switch"),
            ("↑↓", arrows),
            ("PgUp/PgDn", "Scroll"),
            ("Ctrl+L", "Clear terminal"),
            ("Ctrl+K", "Clear chat"),
            ("Ctrl+C", "Quit"),
        ]
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];

        if self.running > 0 {
            spans.push(Span::styled(
                format!("{} {} running", self.spinner, self.running),
                Style::default().fg(palette::STATUS_YELLOW),
            ));
            spans.push(Span::styled(" │ ", styles::text_muted()));
        }

        for (i, (key, action)) in self.bindings().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
