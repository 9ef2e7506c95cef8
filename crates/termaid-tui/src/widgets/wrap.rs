//! Display-width aware word wrapping.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to rows no wider than `width` columns.
///
/// Embedded newlines start new rows; words wider than a row are split.
/// An empty line yields one empty row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source in text.split('\n') {
        let source = source.trim_end_matches('\r');
        let mut row = String::new();
        let mut row_width = 0;
        // A row with only leading spaces is still "started"
        let mut started = false;

        for word in source.split(' ') {
            let word_width = word.width();
            let gap = usize::from(started);

            if row_width + gap + word_width <= width {
                if started {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                started = true;
                continue;
            }

            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(c);
                row_width += w;
            }
            started = true;
        }

        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_row() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_newlines_start_rows() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_crlf_is_trimmed() {
        assert_eq!(wrap_text("dir\r\nfile", 10), vec!["dir", "file"]);
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_leading_indentation_is_kept() {
        assert_eq!(wrap_text("  src/main.rs", 20), vec!["  src/main.rs"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_row() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
