//! Terminal pane contents.
//!
//! Lines are kept in order of addition with exactly one
//! [`TerminalLine::CursorPlaceholder`] at the end; it is popped before each
//! append and pushed back afterwards.

use termaid_core::{format_prompt, ResultKind, TerminalLine};

use crate::scroll_state::ScrollState;

/// Ordered terminal lines plus scroll position
#[derive(Debug, Clone)]
pub struct TerminalView {
    lines: Vec<TerminalLine>,
    pub scroll: ScrollState,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            lines: vec![TerminalLine::CursorPlaceholder],
            scroll: ScrollState::new(),
        }
    }

    /// Echo a submitted command with the prompt for `cwd` as it is now
    pub fn append_command(&mut self, text: impl Into<String>, cwd: &str) {
        self.push_line(TerminalLine::Command {
            prompt: format_prompt(cwd),
            text: text.into(),
        });
    }

    /// Append command output, styled by `kind`
    pub fn append_result(&mut self, kind: ResultKind, text: impl Into<String>) {
        self.push_line(kind.into_line(text.into()));
    }

    /// Drop everything except a fresh placeholder
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(TerminalLine::CursorPlaceholder);
        self.scroll.reset();
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Lines and scroll state borrowed together for rendering
    pub fn render_parts(&mut self) -> (&[TerminalLine], &mut ScrollState) {
        (&self.lines, &mut self.scroll)
    }

    /// Number of lines, placeholder included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when only the placeholder is present
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1
    }

    fn push_line(&mut self, line: TerminalLine) {
        if self.lines.last().is_some_and(TerminalLine::is_placeholder) {
            self.lines.pop();
        }
        self.lines.push(line);
        self.lines.push(TerminalLine::CursorPlaceholder);
        self.scroll.scroll_to_bottom();
    }
}
