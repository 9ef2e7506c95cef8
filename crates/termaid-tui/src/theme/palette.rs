//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Terminal pane ---
pub const PROMPT: Color = Color::Green;
pub const COMMAND_TEXT: Color = Color::White;
pub const OUTPUT_TEXT: Color = Color::Gray;
pub const ERROR_TEXT: Color = Color::LightRed;

// --- Chat pane ---
pub const USER_NAME: Color = Color::LightBlue;
pub const ASSISTANT_NAME: Color = Color::LightMagenta;
