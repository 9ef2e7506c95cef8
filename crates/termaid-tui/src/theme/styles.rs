//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use termaid_core::{ConnectivityStatus, Sender};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Terminal pane ---
pub fn prompt() -> Style {
    Style::default()
        .fg(palette::PROMPT)
        .add_modifier(Modifier::BOLD)
}

pub fn command_text() -> Style {
    Style::default().fg(palette::COMMAND_TEXT)
}

pub fn output_text() -> Style {
    Style::default().fg(palette::OUTPUT_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::ERROR_TEXT)
}

// --- Chat pane ---
pub fn sender_name(sender: Sender) -> Style {
    let color = match sender {
        Sender::User => palette::USER_NAME,
        Sender::Assistant => palette::ASSISTANT_NAME,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn placeholder_text() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

/// Dot glyph and style for the connectivity badge
pub fn connectivity_indicator(status: ConnectivityStatus) -> (&'static str, Style) {
    match status {
        ConnectivityStatus::Connected => ("●", Style::default().fg(palette::STATUS_GREEN)),
        ConnectivityStatus::ServerError => ("●", Style::default().fg(palette::STATUS_YELLOW)),
        ConnectivityStatus::Disconnected => ("●", Style::default().fg(palette::STATUS_RED)),
        ConnectivityStatus::Unknown => ("○", text_muted()),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
