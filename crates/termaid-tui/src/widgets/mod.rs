//! Custom widget components

mod chat_pane;
mod header;
mod key_hints;
mod terminal_pane;
mod wrap;

pub use chat_pane::{cursor_position as chat_cursor_position, ChatPane};
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use terminal_pane::{cursor_position as terminal_cursor_position, TerminalPane};
pub use wrap::wrap_text;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Loading spinner glyph for an animation frame
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
