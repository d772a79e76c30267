//! Transcript import: recover text and marks from a marks/text line file
//!
//! Marks lines are plain text, so a mark is found by visual column rather
//! than by raw char offset. Each freshly extracted position is mapped to the
//! column it occupies in its text line, and whatever non-blank character the
//! marks line holds at that column becomes its mark.

use std::collections::HashMap;

use crate::models::{Document, LineScan, Mark};
use crate::parse::{normalize_spaces, scan_document};
use crate::text::annotations::MarkLayer;
use crate::text::SyllableRef;
use crate::utils::columns::visual_column;

/// Text content and per-line marks lines read from a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranscript {
    /// Text lines joined with `\n`
    pub content: String,

    /// Marks line for each content line, by line sequence number
    pub marks_lines: Vec<String>,
}

/// Split a transcript into text content and marks lines.
///
/// Empty lines are separators. A trailing marks line without a text line is
/// paired with an empty text line.
pub fn parse_transcript(raw: &str) -> ParsedTranscript {
    let normalized = normalize_spaces(raw);
    let lines: Vec<&str> = normalized
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut content_lines = Vec::new();
    let mut marks_lines = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if lines[i].is_empty() {
            i += 1;
            continue;
        }

        let marks_line = lines[i];
        let text_line = lines.get(i + 1).copied().unwrap_or_default();
        i += 2;

        content_lines.push(text_line);
        marks_lines.push(marks_line.to_string());
    }

    ParsedTranscript {
        content: content_lines.join("\n"),
        marks_lines,
    }
}

/// Map marks lines onto the positions of the re-scanned text.
///
/// A line without a marks line stays unmarked.
pub fn realign_marks(lines: &[LineScan], marks_lines: &[String]) -> MarkLayer {
    let mut marks = MarkLayer::new();

    for (line_index, line) in lines.iter().enumerate() {
        let Some(marks_line) = marks_lines.get(line_index) else {
            continue;
        };

        let mark_at_column: HashMap<usize, char> = marks_line
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch != ' ' && *ch != '\t')
            .collect();

        for (pos_index, pos) in line.positions.iter().enumerate() {
            let column = visual_column(&line.line_text, pos.index);
            if let Some(glyph) = mark_at_column.get(&column) {
                marks.set(SyllableRef::new(line_index, pos_index), Mark::from_glyph(*glyph));
            }
        }
    }

    marks
}

/// Build a document from a transcript file
pub fn import_transcript(name: impl Into<String>, raw: &str) -> Document {
    let parsed = parse_transcript(raw);
    let lines = scan_document(&parsed.content);
    let marks = realign_marks(&lines, &parsed.marks_lines);

    log::info!(
        "imported transcript: {} lines, {} marks",
        lines.len(),
        marks.len()
    );

    let mut document = Document::new(name, parsed.content);
    document.marks = marks;
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_and_separators() {
        let raw = "\u{2012}  \nab\n\n   \nxyz\n";
        let parsed = parse_transcript(raw);
        assert_eq!(parsed.content, "ab\nxyz");
        assert_eq!(parsed.marks_lines, vec!["\u{2012}  ".to_string(), "   ".to_string()]);
    }

    #[test]
    fn test_parse_truncated_file() {
        let parsed = parse_transcript("\u{2012}\nab\n\n \u{222A}");
        assert_eq!(parsed.content, "ab\n");
        assert_eq!(parsed.marks_lines.len(), 2);
    }

    #[test]
    fn test_parse_normalizes_nbsp_and_crlf() {
        let parsed = parse_transcript("\u{2012}\r\narma&nbsp;virum\r\n");
        assert_eq!(parsed.content, "arma virum");
        assert_eq!(parsed.marks_lines, vec!["\u{2012}".to_string()]);
    }

    #[test]
    fn test_realign_uses_visual_columns() {
        // the combining breve after s takes no column in the marks line
        let lines = scan_document("nimis\u{0306} ab");
        let marks_lines = vec![" u \u{222A}  \u{2012}".to_string()];
        let marks = realign_marks(&lines, &marks_lines);

        assert_eq!(marks.get(SyllableRef::new(0, 0)), Some(Mark::Short));
        assert_eq!(marks.get(SyllableRef::new(0, 1)), Some(Mark::Short));
        assert_eq!(marks.get(SyllableRef::new(0, 2)), Some(Mark::Long));
    }

    #[test]
    fn test_realign_passes_other_characters_through() {
        let lines = scan_document("arma");
        let marks = realign_marks(&lines, &["C  ?".to_string()]);
        assert_eq!(marks.get(SyllableRef::new(0, 0)), Some(Mark::from_char('C')));
        assert_eq!(marks.get(SyllableRef::new(0, 1)), Some(Mark::Other('?')));
    }

    #[test]
    fn test_missing_marks_lines_leave_lines_unmarked() {
        let lines = scan_document("arma\nvirum");
        let marks = realign_marks(&lines, &["-".to_string()]);
        assert_eq!(marks.len(), 1);
        assert!(marks.line(1).is_empty());
    }
}
