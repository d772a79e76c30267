//! Visual columns of text lines
//!
//! A marks line sits under its text line one column per visible character.
//! Combining marks attach to the previous character and take no column;
//! every other char, em-dash included, takes exactly one.

/// Combining-mark blocks that never occupy a column
const COMBINING_RANGES: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

/// True if `ch` is a combining mark
pub fn is_combining(ch: char) -> bool {
    COMBINING_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&ch))
}

/// Column occupied by the char at `index` (count of non-combining chars before it)
pub fn visual_column(line: &str, index: usize) -> usize {
    line.chars().take(index).filter(|ch| !is_combining(*ch)).count()
}

/// Filler written under a non-marked text char; `None` for combining chars
pub fn filler_for(ch: char) -> Option<char> {
    if is_combining(ch) {
        None
    } else if ch == '\t' {
        Some('\t')
    } else {
        Some(' ')
    }
}
