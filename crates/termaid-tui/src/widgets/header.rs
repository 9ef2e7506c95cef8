//! Header bar widget
//!
//! Title and working directory on the left, backend connectivity badge on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use termaid_core::{shorten, ConnectivityStatus};

use crate::theme::{palette, styles};

/// Main header showing app title, current directory and connectivity
pub struct MainHeader<'a> {
    cwd: &'a str,
    connectivity: ConnectivityStatus,
    server: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(cwd: &'a str, connectivity: ConnectivityStatus) -> Self {
        Self {
            cwd,
            connectivity,
            server: None,
        }
    }

    /// Show the backend address next to the badge
    pub fn with_server(mut self, server: &'a str) -> Self {
        self.server = Some(server);
        self
    }

    fn badge(&self) -> Line<'a> {
        let (dot, dot_style) = styles::connectivity_indicator(self.connectivity);
        let mut spans = vec![
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(self.connectivity.label(), dot_style),
        ];
        if let Some(server) = self.server {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(server, styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("termaid", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(shorten(self.cwd).into_owned(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let badge = self.badge();
        let badge_width = badge.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Badge wins over the server address when space runs out
        if left_width + badge_width + 2 <= inner.width {
            let x = inner.x + inner.width - badge_width;
            buf.set_line(x, inner.y, &badge, badge_width);
        } else {
            let compact = Self {
                server: None,
                ..self
            }
            .badge();
            let compact_width = compact.width() as u16;
            if left_width + compact_width + 1 <= inner.width {
                let x = inner.x + inner.width - compact_width;
                buf.set_line(x, inner.y, &compact, compact_width);
            }
        }
    }
}
