//! Scansion session state
//!
//! A session is the explicit context of one open document: the document
//! itself, the lines derived from its content, and the global cursor. Every
//! operation takes the session it acts on, so independent sessions never
//! share state.

use serde::{Deserialize, Serialize};

use super::commands::{EditCommand, EditOutcome};
use super::core::{Document, LineScan, Mark, MeterKind};
use crate::diagnostics::{line_errors, validate_document, Diagnostics};
use crate::parse::scan_document;
use crate::text::{from_global, to_global, total_positions, SyllableRef};
use crate::transcript::export_transcript;

/// An open document with its derived lines and cursor
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScansionSession {
    document: Document,
    lines: Vec<LineScan>,
    cursor: usize,
}

impl ScansionSession {
    /// Open a document; its content is scanned and the cursor starts at 0
    pub fn new(document: Document) -> Self {
        let lines = scan_document(&document.content);
        Self {
            document,
            lines,
            cursor: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn lines(&self) -> &[LineScan] {
        &self.lines
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn meter(&self) -> MeterKind {
        self.document.meter
    }

    pub fn total_positions(&self) -> usize {
        total_positions(&self.lines)
    }

    /// The syllable under the cursor, if the document has any
    pub fn current(&self) -> Option<SyllableRef> {
        from_global(&self.lines, self.cursor)
    }

    pub fn mark_at(&self, at: SyllableRef) -> Option<Mark> {
        self.document.marks.get(at)
    }

    /// Change the meter; returns true when the document changed
    pub fn set_meter(&mut self, meter: MeterKind) -> bool {
        let changed = self.document.meter != meter;
        self.document.meter = meter;
        changed
    }

    /// Assign a mark at the cursor and advance.
    ///
    /// Does nothing when there is no syllable to mark.
    pub fn set_mark(&mut self, mark: Mark) -> EditOutcome {
        let Some(at) = self.current() else {
            return self.outcome(false);
        };
        self.document.marks.set(at, mark);
        self.advance();
        self.outcome(true)
    }

    /// Remove the mark at the cursor; returns true if one was present
    pub fn clear_mark(&mut self) -> bool {
        match self.current() {
            Some(at) => self.document.marks.clear(at).is_some(),
            None => false,
        }
    }

    /// Move the cursor by `delta`, clamped to `[0, total - 1]`
    pub fn move_cursor(&mut self, delta: isize) -> usize {
        let last = self.total_positions().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.cursor
    }

    pub fn advance(&mut self) -> usize {
        self.move_cursor(1)
    }

    pub fn retreat(&mut self) -> usize {
        self.move_cursor(-1)
    }

    /// Put the cursor on a specific syllable; false if it does not exist
    pub fn jump_to(&mut self, at: SyllableRef) -> bool {
        let exists = self
            .lines
            .get(at.line)
            .is_some_and(|line| at.pos < line.positions.len());
        if exists {
            self.cursor = to_global(&self.lines, at);
        }
        exists
    }

    /// Apply a keyboard command
    pub fn apply(&mut self, command: EditCommand) -> EditOutcome {
        match command {
            EditCommand::SetMark(mark) => self.set_mark(mark),
            EditCommand::ClearAndAdvance => {
                let changed = self.clear_mark();
                self.advance();
                self.outcome(changed)
            }
            EditCommand::ClearAndRetreat => {
                let changed = self.clear_mark();
                self.retreat();
                self.outcome(changed)
            }
            EditCommand::ClearInPlace => {
                let changed = self.clear_mark();
                self.outcome(changed)
            }
            EditCommand::MoveLeft => {
                self.retreat();
                self.outcome(false)
            }
            EditCommand::MoveRight => {
                self.advance();
                self.outcome(false)
            }
        }
    }

    /// Error flag per position of one line under the current meter
    pub fn line_errors(&self, line_index: usize) -> Vec<bool> {
        let count = self
            .lines
            .get(line_index)
            .map_or(0, |line| line.positions.len());
        line_errors(count, &self.document.marks.line(line_index), self.document.meter)
    }

    /// Meter diagnostics for the whole document
    pub fn diagnostics(&self) -> Diagnostics {
        validate_document(&self.lines, &self.document.marks, self.document.meter)
    }

    /// Serialize the document as a transcript
    pub fn export_transcript(&self) -> String {
        export_transcript(&self.lines, &self.document.marks)
    }

    fn outcome(&self, marks_changed: bool) -> EditOutcome {
        EditOutcome {
            marks_changed,
            cursor: self.cursor,
        }
    }
}
