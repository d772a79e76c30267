//! Transcript export: a marks line above each text line
//!
//! The marks line mirrors its text line column for column so the pair can be
//! read (and edited) as plain text. Tabs are copied through to keep both
//! lines aligned in any viewer.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::settings::{TEXT_EXTENSION, TRANSCRIPT_EXTENSION, TRANSCRIPT_TIMESTAMP_FORMAT};
use crate::models::LineScan;
use crate::text::annotations::MarkLayer;
use crate::text::SyllableRef;
use crate::utils::columns::filler_for;

/// Build the marks line for one text line
pub fn marks_line(line: &LineScan, marks: &MarkLayer) -> String {
    let by_index: HashMap<usize, usize> = line
        .positions
        .iter()
        .enumerate()
        .map(|(pos_index, pos)| (pos.index, pos_index))
        .collect();

    let mut out = String::with_capacity(line.line_text.len());
    for (index, ch) in line.line_text.chars().enumerate() {
        let Some(filler) = filler_for(ch) else {
            continue;
        };
        match by_index.get(&index) {
            Some(pos_index) => {
                let at = SyllableRef::new(line.line_index, *pos_index);
                out.push(marks.get(at).map(|mark| mark.glyph()).unwrap_or(' '));
            }
            None => out.push(filler),
        }
    }
    out
}

/// Serialize every line as `marks\ntext\n`, pairs separated by a blank line
pub fn export_transcript(lines: &[LineScan], marks: &MarkLayer) -> String {
    let mut output = String::new();

    for (i, line) in lines.iter().enumerate() {
        output.push_str(&marks_line(line, marks));
        output.push('\n');
        output.push_str(&line.line_text);
        output.push('\n');

        if i + 1 < lines.len() {
            output.push('\n');
        }
    }

    output
}

/// `YYYY-MM-DD_HH-MM-SS_{base}.mtr.txt`, `base` without a `.mtr.txt`/`.txt` suffix
pub fn transcript_file_name(name: &str, timestamp: NaiveDateTime) -> String {
    let base = name
        .strip_suffix(TRANSCRIPT_EXTENSION)
        .or_else(|| name.strip_suffix(TEXT_EXTENSION))
        .unwrap_or(name);
    format!(
        "{}_{}{}",
        timestamp.format(TRANSCRIPT_TIMESTAMP_FORMAT),
        base,
        TRANSCRIPT_EXTENSION
    )
}
