//! Screen layout definitions for the TUI
//!
//! Header on top, the terminal and chat panes side by side, and a one-row
//! key hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Below this width the panes stack vertically
pub const STACK_BELOW_WIDTH: u16 = 80;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub terminal: Rect,
    pub chat: Rect,
    pub footer: Rect,
}

/// Split the screen. The terminal pane gets 60% of the body.
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let panes = if area.width < STACK_BELOW_WIDTH {
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
    } else {
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
    };
    let [terminal, chat] = panes.areas(body);

    ScreenAreas {
        header,
        terminal,
        chat,
        footer,
    }
}
