//! Scroll state shared by the terminal and chat panes.
//!
//! Handlers adjust the offset in response to scroll commands; the TUI layer
//! reports content and viewport sizes during render.

/// Vertical scroll position with follow-the-tail behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Whether to follow new content
    pub auto_scroll: bool,
    /// Total number of rendered rows (set during render)
    pub total_lines: usize,
    /// Visible rows (set during render)
    pub visible_lines: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);

        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    /// Scroll to bottom and resume following
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Forget the previous position (after the content is cleared)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Update with new content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.auto_scroll {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }
}
