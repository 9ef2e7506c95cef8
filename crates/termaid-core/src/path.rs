//! Path shortening for prompt display

use std::borrow::Cow;

/// Paths at or below this many characters are shown verbatim
pub const MAX_DISPLAY_LEN: usize = 50;

/// Placeholder segment inserted in place of elided directories
const ELLIPSIS: &str = "...";

/// Shorten a working-directory path for display in a prompt.
///
/// Paths of at most [`MAX_DISPLAY_LEN`] characters are returned unchanged.
/// Longer paths with more than three segments collapse to
/// `first<sep>...<sep>parent<sep>last`. The separator is `\` when the path
/// contains one, `/` otherwise.
///
/// The result is a fixed point: shortening an already shortened path
/// returns it unchanged.
pub fn shorten(path: &str) -> Cow<'_, str> {
    if path.chars().count() <= MAX_DISPLAY_LEN {
        return Cow::Borrowed(path);
    }

    let sep = separator_of(path);
    let parts: Vec<&str> = path.split(sep).collect();
    if parts.len() <= 3 {
        return Cow::Borrowed(path);
    }

    let last = parts[parts.len() - 1];
    let parent = parts[parts.len() - 2];
    Cow::Owned(format!(
        "{first}{sep}{ELLIPSIS}{sep}{parent}{sep}{last}",
        first = parts[0]
    ))
}

/// Render the prompt glyph for a working directory, e.g. `C:\Users>`
pub fn format_prompt(cwd: &str) -> String {
    format!("{}>", shorten(cwd))
}

fn separator_of(path: &str) -> char {
    if path.contains('\\') {
        '\\'
    } else {
        '/'
    }
}
