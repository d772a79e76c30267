//! Diagnostics module for scansion error detection
//!
//! Generic diagnostic records located by (line, position). Meter validation
//! is the only producer today; the front end uses `kind`/`message` to explain
//! a highlighted mark.

pub mod meter;

use serde::{Deserialize, Serialize};

use crate::models::{LineScan, MeterKind};
use crate::text::MarkLayer;

pub use meter::{analyze_document_meter, analyze_line, line_errors, position_has_error, MeterViolation};

/// A meter error attached to one syllable position
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiagnosticMark {
    /// Line index in the document
    pub line: usize,
    /// Syllable position within the line
    pub pos: usize,
    /// Kind identifier (e.g., "meter_unpaired_short")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(line: usize, pos: usize, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            pos,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Collection of diagnostic marks for an entire document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.marks.is_empty()
    }

    /// Check if a given position carries an error
    pub fn has_error_at(&self, line: usize, pos: usize) -> bool {
        self.marks
            .iter()
            .any(|m| m.line == line && m.pos == pos)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Validate every line of a document under `meter`
pub fn validate_document(lines: &[LineScan], marks: &MarkLayer, meter: MeterKind) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(analyze_document_meter(lines, marks, meter));
    diagnostics
}
