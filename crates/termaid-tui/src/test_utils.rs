//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widgets and full frames can be rendered
//! and inspected as plain text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

use termaid_app::config::Settings;
use termaid_app::AppState;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Test wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Whole screen as text, one row per line
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }

    /// Cursor position after the last draw
    pub fn cursor(&mut self) -> (u16, u16) {
        let pos = self
            .terminal
            .get_cursor_position()
            .expect("Failed to read cursor");
        (pos.x, pos.y)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// App state rooted at `cwd` with default settings
pub fn test_state(cwd: &str) -> AppState {
    AppState::new(Settings::default(), cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_custom_size() {
        let term = TestTerminal::with_size(50, 7);
        assert_eq!(term.area(), Rect::new(0, 0, 50, 7));
    }

    #[test]
    fn test_line_and_buffer_lookup() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("first\nsecond"), term.area());

        assert!(term.line_contains(1, "second"));
        assert!(!term.line_contains(0, "second"));
        assert!(term.buffer_contains("first"));
        assert_eq!(term.content().lines().count(), 3);
    }
}
