//! Marks row view model
//!
//! The structure handed to JavaScript for drawing the marks above each text
//! line. Spacing follows the same column rules as the transcript export, so
//! the editor and an exported file line up identically. JavaScript only
//! creates the DOM; no measuring happens on its side.

use serde::{Deserialize, Serialize};

use crate::models::{LineScan, ScansionSession};
use crate::text::{to_global, SyllableRef};
use crate::utils::columns::filler_for;

/// All lines of the open document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MarksDisplay {
    pub lines: Vec<RenderMarksLine>,

    /// Syllable under the cursor, for scrolling its line into view
    pub cursor: Option<SyllableRef>,
}

/// One text line with the marks row drawn above it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderMarksLine {
    pub line_index: usize,

    /// Text shown under the marks row
    pub text: String,

    pub spans: Vec<MarkSpan>,
}

/// A mark slot preceded by the filler that aligns it with its vowel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarkSpan {
    /// Spaces and tabs between the previous slot and this one
    pub spacing: String,

    /// Display glyph, a single space when unmarked
    pub glyph: String,

    pub pos_index: usize,

    /// Slot under the cursor
    pub active: bool,

    /// Mark breaks the document's meter
    pub error: bool,

    pub empty: bool,

    /// CSS class names to apply
    pub classes: Vec<String>,
}

/// Filler for the chars of `line_text` in `start..end`
fn spacing_between(line_text: &str, start: usize, end: usize) -> String {
    line_text
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .filter_map(filler_for)
        .collect()
}

fn classes_for(active: bool, error: bool, empty: bool) -> Vec<String> {
    let mut classes = vec!["mark".to_string()];
    if active {
        classes.push("active".to_string());
    }
    if error {
        classes.push("error".to_string());
    }
    if empty {
        classes.push("empty".to_string());
    }
    classes
}

/// Build the marks row for one line of the session
pub fn render_marks_line(session: &ScansionSession, line: &LineScan) -> RenderMarksLine {
    let errors = session.line_errors(line.line_index);
    let mut spans = Vec::with_capacity(line.positions.len());
    let mut last_index = 0;

    for (pos_index, pos) in line.positions.iter().enumerate() {
        let at = SyllableRef::new(line.line_index, pos_index);
        let mark = session.mark_at(at);
        let active = to_global(session.lines(), at) == session.cursor();
        let error = errors.get(pos_index).copied().unwrap_or(false);
        let empty = mark.is_none();

        spans.push(MarkSpan {
            spacing: spacing_between(&line.line_text, last_index, pos.index),
            glyph: mark.map(|m| m.glyph()).unwrap_or(' ').to_string(),
            pos_index,
            active,
            error,
            empty,
            classes: classes_for(active, error, empty),
        });
        last_index = pos.index + 1;
    }

    RenderMarksLine {
        line_index: line.line_index,
        text: line.line_text.clone(),
        spans,
    }
}

/// Build the marks rows for every line of the session
pub fn render_marks_rows(session: &ScansionSession) -> MarksDisplay {
    MarksDisplay {
        lines: session
            .lines()
            .iter()
            .map(|line| render_marks_line(session, line))
            .collect(),
        cursor: session.current(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Mark, MeterKind};

    #[test]
    fn test_spacing_matches_columns() {
        let doc = Document::new("t.txt", "\tarma virum");
        let session = ScansionSession::new(doc);
        let display = render_marks_rows(&session);

        let spacings: Vec<&str> = display.lines[0]
            .spans
            .iter()
            .map(|span| span.spacing.as_str())
            .collect();
        // a(1) a(4) i(7) u(9)
        assert_eq!(spacings, vec!["\t", "  ", "  ", " "]);
    }

    #[test]
    fn test_combining_chars_take_no_space() {
        // a + combining arrow above survives NFC as two chars
        let session = ScansionSession::new(Document::new("t.txt", "a\u{20D7}ta"));
        let line = &session.lines()[0];
        let rendered = render_marks_line(&session, line);
        assert_eq!(rendered.spans.len(), 2);
        assert_eq!(rendered.spans[1].spacing, " ");
    }

    #[test]
    fn test_flags() {
        let mut doc = Document::new("t.txt", "arma virum");
        doc.meter = MeterKind::Dactylic;
        let mut session = ScansionSession::new(doc);
        session.set_mark(Mark::Short);

        let display = render_marks_rows(&session);
        let spans = &display.lines[0].spans;

        assert_eq!(spans[0].glyph, "\u{222A}");
        assert!(spans[0].error);
        assert!(!spans[0].empty);
        assert_eq!(spans[0].classes, vec!["mark", "error"]);

        assert!(spans[1].active);
        assert!(spans[1].empty);
        assert_eq!(spans[1].glyph, " ");
        assert_eq!(spans[1].classes, vec!["mark", "active", "empty"]);

        assert_eq!(display.cursor, Some(SyllableRef::new(0, 1)));
    }
}
