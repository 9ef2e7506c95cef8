//! Key events as the session controller sees them.
//!
//! The TUI converts crossterm events into [`InputKey`] so the controller and
//! its tests never depend on a terminal library.

/// Abstract input key, converted from `crossterm::event::KeyEvent` at the
/// TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+l, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Whether the key edits text in the focused input line
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            InputKey::Char(_)
                | InputKey::Backspace
                | InputKey::Delete
                | InputKey::Left
                | InputKey::Right
                | InputKey::Home
                | InputKey::End
        )
    }
}
