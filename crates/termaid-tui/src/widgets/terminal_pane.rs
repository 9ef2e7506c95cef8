//! Terminal pane widget
//!
//! Renders command echoes, output and errors, followed by the live prompt
//! row where the cursor placeholder sits. Output is word-wrapped to the pane
//! width. Command echoes and the prompt row break at the pane edge, so long
//! input stays visible and the cursor follows it onto continuation rows.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use termaid_app::{LineInput, ScrollState};
use termaid_core::{format_prompt, TerminalLine};

use crate::theme::{palette, styles};

use super::wrap_text;

/// Scrollable terminal transcript with an inline prompt
pub struct TerminalPane<'a> {
    lines: &'a [TerminalLine],
    cwd: &'a str,
    input: &'a LineInput,
    focused: bool,
    spinner: Option<&'static str>,
}

impl<'a> TerminalPane<'a> {
    pub fn new(lines: &'a [TerminalLine], cwd: &'a str, input: &'a LineInput) -> Self {
        Self {
            lines,
            cwd,
            input,
            focused: false,
            spinner: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show a spinner in the title while commands are running
    pub fn busy(mut self, spinner: Option<&'static str>) -> Self {
        self.spinner = spinner;
        self
    }

    fn build_rows(&self, width: usize) -> Vec<Line<'a>> {
        let mut rows = Vec::with_capacity(self.lines.len() + 1);

        for line in self.lines {
            match line {
                TerminalLine::Command { prompt, text } => rows.extend(styled_rows(
                    &[
                        (prompt.as_str(), styles::prompt()),
                        (" ", Style::default()),
                        (text.as_str(), styles::command_text()),
                    ],
                    width,
                )),
                TerminalLine::Output(text) => {
                    push_wrapped(&mut rows, text, width, styles::output_text())
                }
                TerminalLine::Error(text) => {
                    push_wrapped(&mut rows, text, width, styles::error_text())
                }
                TerminalLine::CursorPlaceholder => {
                    let prompt = format_prompt(self.cwd);
                    rows.extend(styled_rows(&prompt_segments(&prompt, self.input), width));
                }
            }
        }

        rows
    }
}

/// Live prompt row: prompt, space, input, and one blank cell for the cursor
/// to sit on past the end of the input
fn prompt_segments<'s>(prompt: &'s str, input: &'s LineInput) -> [(&'s str, Style); 4] {
    [
        (prompt, styles::prompt()),
        (" ", Style::default()),
        (input.text(), styles::command_text()),
        (" ", Style::default()),
    ]
}

/// Break styled text into rows of at most `width` columns.
///
/// Breaks fall between chars, not words. A wide char that would straddle
/// the edge starts the next row.
fn break_cells(segments: &[(&str, Style)], width: usize) -> Vec<Vec<(char, Style)>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut used = 0;

    for &(text, style) in segments {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && used > 0 {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push((c, style));
            used += w;
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

fn styled_rows<'r>(segments: &[(&str, Style)], width: usize) -> Vec<Line<'r>> {
    break_cells(segments, width)
        .into_iter()
        .map(|row| {
            let mut spans: Vec<Span<'r>> = Vec::new();
            let mut run = String::new();
            let mut run_style = Style::default();
            for (c, style) in row {
                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(c);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }
            Line::from(spans)
        })
        .collect()
}

/// Output with no text takes no rows
fn push_wrapped<'a>(rows: &mut Vec<Line<'a>>, text: &str, width: usize, style: Style) {
    if text.is_empty() {
        return;
    }
    let text = text.strip_suffix('\n').unwrap_or(text);
    rows.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style))),
    );
}

impl StatefulWidget for TerminalPane<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        let title = match self.spinner {
            Some(spinner) => format!(" Terminal {spinner} "),
            None => " Terminal ".to_string(),
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(title, styles::accent()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = self.build_rows(inner.width as usize);
        state.update_content_size(rows.len(), inner.height as usize);

        let visible: Vec<Line> = rows
            .into_iter()
            .skip(state.offset)
            .take(inner.height as usize)
            .collect();
        Paragraph::new(visible).render(inner, buf);
    }
}

/// Cursor position for the live prompt row, if it is scrolled into view.
///
/// Uses the content size recorded by the last render.
pub fn cursor_position(
    area: Rect,
    scroll: &ScrollState,
    cwd: &str,
    input: &LineInput,
) -> Option<Position> {
    let inner = area.inner(ratatui::layout::Margin::new(1, 1));
    if inner.height == 0 || inner.width == 0 || scroll.total_lines == 0 {
        return None;
    }

    let prompt = format_prompt(cwd);
    let rows = break_cells(&prompt_segments(&prompt, input), inner.width as usize);
    let first_row = scroll.total_lines.checked_sub(rows.len())?;

    // Index of the cell the cursor sits on, counted across all rows
    let mut remaining = prompt.chars().count() + 1 + input.cursor();
    let mut cursor = None;
    for (r, cells) in rows.iter().enumerate() {
        if remaining < cells.len() {
            let column: usize = cells[..remaining]
                .iter()
                .map(|(c, _)| c.width().unwrap_or(0))
                .sum();
            cursor = Some((first_row + r, column));
            break;
        }
        remaining -= cells.len();
    }
    let (row, column) = cursor?;

    if row < scroll.offset || row >= scroll.offset + inner.height as usize {
        return None;
    }

    let x = inner.x + (column as u16).min(inner.width - 1);
    let y = inner.y + (row - scroll.offset) as u16;
    Some(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use termaid_app::TerminalView;
    use termaid_core::ResultKind;

    fn render(term: &mut TestTerminal, view: &mut TerminalView, cwd: &str, input: &LineInput) {
        let area = term.area();
        let (lines, scroll) = view.render_parts();
        term.render_stateful_widget(TerminalPane::new(lines, cwd, input), area, scroll);
    }

    #[test]
    fn test_renders_commands_output_and_prompt() {
        let mut term = TestTerminal::with_size(60, 10);
        let mut view = TerminalView::new();
        view.append_command("dir", "C:\\Users\\dev");
        view.append_result(ResultKind::Output, "file1.txt\nfile2.txt");
        let mut input = LineInput::new();
        input.set("git st");

        render(&mut term, &mut view, "C:\\Users\\dev", &input);

        assert!(term.line_contains(1, "C:\\Users\\dev> dir"));
        assert!(term.line_contains(2, "file1.txt"));
        assert!(term.line_contains(3, "file2.txt"));
        assert!(term.line_contains(4, "C:\\Users\\dev> git st"));
    }

    #[test]
    fn test_error_lines_use_error_style() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        view.append_result(ResultKind::Error, "boom");

        render(&mut term, &mut view, "/", &LineInput::new());

        assert!(term.line_contains(1, "boom"));
        assert_eq!(term.buffer()[(1, 1)].fg, palette::ERROR_TEXT);
    }

    #[test]
    fn test_prompt_uses_current_cwd_while_echo_keeps_old() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        view.append_command("cd src", "/home");

        render(&mut term, &mut view, "/home/src", &LineInput::new());

        assert!(term.line_contains(1, "/home> cd src"));
        assert!(term.line_contains(2, "/home/src>"));
    }

    #[test]
    fn test_follows_tail_when_overflowing() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        for i in 0..20 {
            view.append_result(ResultKind::Output, format!("line {i}"));
        }

        render(&mut term, &mut view, "/", &LineInput::new());

        assert!(term.buffer_contains("line 19"));
        assert!(!term.buffer_contains("line 0 "));
        assert_eq!(view.scroll.total_lines, 21);
        assert_eq!(view.scroll.offset, 17);
    }

    #[test]
    fn test_empty_output_takes_no_rows() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        view.append_command("cd src", "/");
        view.append_result(ResultKind::Output, "");

        render(&mut term, &mut view, "/src", &LineInput::new());

        assert_eq!(view.scroll.total_lines, 2);
    }

    #[test]
    fn test_spinner_in_title() {
        let mut term = TestTerminal::with_size(40, 6);
        let view = TerminalView::new();
        let input = LineInput::new();
        let area = term.area();
        let mut scroll = ScrollState::new();
        term.render_stateful_widget(
            TerminalPane::new(view.lines(), "/", &input).busy(Some("⠋")),
            area,
            &mut scroll,
        );
        assert!(term.line_contains(0, "Terminal ⠋"));
    }

    #[test]
    fn test_cursor_position_on_prompt_row() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        view.append_command("ls", "/");
        let mut input = LineInput::new();
        input.set("abc");
        input.move_left();

        render(&mut term, &mut view, "/", &input);

        let pos = cursor_position(term.area(), &view.scroll, "/", &input).unwrap();
        // border + "/>" + space + "ab"
        assert_eq!(pos, Position::new(1 + 2 + 1 + 2, 2));
    }

    #[test]
    fn test_cursor_hidden_when_scrolled_away() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut view = TerminalView::new();
        for i in 0..20 {
            view.append_result(ResultKind::Output, format!("line {i}"));
        }
        render(&mut term, &mut view, "/", &LineInput::new());
        view.scroll.scroll_up(10);

        assert!(cursor_position(term.area(), &view.scroll, "/", &LineInput::new()).is_none());
    }

    #[test]
    fn test_long_command_echo_continues_on_next_row() {
        let mut term = TestTerminal::with_size(20, 8);
        let mut view = TerminalView::new();
        view.append_command("echo abcdefghijklmnopqrstuvwxyz", "/");

        render(&mut term, &mut view, "/", &LineInput::new());

        assert!(term.line_contains(1, "/> echo abcdefghij"));
        assert!(term.line_contains(2, "klmnopqrstuvwxyz"));
        assert!(term.line_contains(3, "/>"));
        assert_eq!(view.scroll.total_lines, 3);
    }

    #[test]
    fn test_long_input_wraps_and_cursor_follows() {
        let mut term = TestTerminal::with_size(20, 8);
        let mut view = TerminalView::new();
        let mut input = LineInput::new();
        input.set("abcdefghijklmnopqrstuvwxyz");

        render(&mut term, &mut view, "/", &input);

        assert!(term.line_contains(1, "/> abcdefghijklmno"));
        assert!(term.line_contains(2, "pqrstuvwxyz"));
        let pos = cursor_position(term.area(), &view.scroll, "/", &input).unwrap();
        // "pqrstuvwxyz" is 11 cells into the continuation row
        assert_eq!(pos, Position::new(1 + 11, 2));

        input.move_home();
        let pos = cursor_position(term.area(), &view.scroll, "/", &input).unwrap();
        assert_eq!(pos, Position::new(1 + 3, 1));
    }

    #[test]
    fn test_cursor_at_exact_edge_moves_to_next_row() {
        // inner width 18: "/> " plus 15 chars fills the first row exactly
        let mut term = TestTerminal::with_size(20, 8);
        let mut view = TerminalView::new();
        let mut input = LineInput::new();
        input.set("abcdefghijklmno");

        render(&mut term, &mut view, "/", &input);

        assert_eq!(view.scroll.total_lines, 2);
        let pos = cursor_position(term.area(), &view.scroll, "/", &input).unwrap();
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn test_break_cells_keeps_wide_chars_whole() {
        let rows = break_cells(&[("ab日本", Style::default())], 3);
        let texts: Vec<String> = rows
            .iter()
            .map(|row| row.iter().map(|(c, _)| c).collect())
            .collect();
        assert_eq!(texts, vec!["ab", "日", "本"]);
    }
}
