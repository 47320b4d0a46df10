//! Lenient parsing of relation rows.
//!
//! A row is a line of characters where the character at position `j` decides whether the
//! current element is related to element `j`. Only `'1'` means "related". Every other
//! character, as well as every position missing from a short line, means "not related".
//! Characters beyond the size of the universe are ignored. Parsing never fails, so a
//! malformed row quietly degrades to fewer pairs.

use log::trace;

/// The character that marks a related pair.
pub const RELATED: char = '1';

/// Remove exactly one trailing line terminator (`\n` or `\r\n`) from `line`.
pub fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

/// The universe size implied by the first row: the number of characters of `line`,
/// excluding the line terminator.
pub fn universe_size(line: &str) -> usize {
    strip_line_terminator(line).chars().count()
}

/// Parse `line` into exactly `size` boolean cells.
pub fn parse_row(line: &str, size: usize) -> Vec<bool> {
    let line = strip_line_terminator(line);
    let mut row = vec![false; size];
    for (cell, c) in row.iter_mut().zip(line.chars()) {
        *cell = c == RELATED;
    }

    trace!(
        "Parsed row `{line}` into {} of {size} related elements.",
        row.iter().filter(|it| **it).count()
    );

    row
}

#[cfg(test)]
mod tests {
    use crate::row_parser::{parse_row, strip_line_terminator, universe_size};

    #[test]
    fn test_short_row_is_padded() {
        assert_eq!(parse_row("101", 4), vec![true, false, true, false]);
    }

    #[test]
    fn test_unknown_characters_and_overflow_are_ignored() {
        assert_eq!(parse_row("10x1extra", 3), vec![true, false, false]);
        assert_eq!(parse_row("2101", 4), vec![false, true, false, true]);
        assert_eq!(parse_row("1 1", 3), vec![true, false, true]);
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(parse_row("", 3), vec![false; 3]);
        assert_eq!(parse_row("\n", 2), vec![false; 2]);
    }

    #[test]
    fn test_terminator_is_not_a_cell() {
        assert_eq!(parse_row("11\r\n", 4), vec![true, true, false, false]);
        assert_eq!(parse_row("1\n", 1), vec![true]);
    }

    #[test]
    fn test_universe_size() {
        assert_eq!(universe_size("1010\n"), 4);
        assert_eq!(universe_size("1010\r\n"), 4);
        assert_eq!(universe_size("1010"), 4);
        assert_eq!(universe_size("\n"), 0);
        assert_eq!(universe_size(""), 0);
        // Characters are counted, not bytes.
        assert_eq!(universe_size("1é0\n"), 3);
    }

    #[test]
    fn test_strip_only_one_terminator() {
        assert_eq!(strip_line_terminator("10\n\n"), "10\n");
        assert_eq!(strip_line_terminator("10\r"), "10\r");
        assert_eq!(strip_line_terminator("10"), "10");
    }
}
