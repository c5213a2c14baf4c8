//! Whitespace cleanup for extracted page text.
//!
//! The cleanup is deliberately lossy: paragraph structure collapses into a
//! single line. Runs of two or more spaces inside a line are treated as
//! fragment boundaries, single spaces are kept as they are.

/// Separator that splits a trimmed line into fragments
const FRAGMENT_SEPARATOR: &str = "  ";

/// Cleans extracted text into a single whitespace-normalized line.
///
/// - Splits the text into lines
/// - Trims each line
/// - Splits each line on every occurrence of two consecutive spaces
/// - Trims each fragment and drops empty ones
/// - Joins the remaining fragments with a single space
pub fn clean(text: &str) -> String {
    split_lines(text)
        .map(str::trim)
        .flat_map(|line| line.split(FRAGMENT_SEPARATOR))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text on every line boundary character.
///
/// `\r\n` yields an empty piece between the two characters, which `clean`
/// discards anyway.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_boundary)
}

/// Line boundaries recognised by `split_lines`
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
