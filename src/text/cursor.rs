//! Syllable addressing and the global cursor
//!
//! A syllable is addressed either by `(line, pos)` or by one flattened index
//! counting positions across all lines in order. Both conversions walk the
//! line list, which is short and only consulted on user events.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScansionError;
use crate::models::LineScan;

/// A syllable position inside a document (line, position-in-line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SyllableRef {
    pub line: usize,
    pub pos: usize,
}

impl SyllableRef {
    pub fn new(line: usize, pos: usize) -> Self {
        Self { line, pos }
    }
}

/// Persisted key form: `"{line}-{pos}"`
impl fmt::Display for SyllableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.pos)
    }
}

impl FromStr for SyllableRef {
    type Err = ScansionError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || ScansionError::InvalidMarkKey(key.to_string());
        let (line, pos) = key.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            line: line.parse().map_err(|_| invalid())?,
            pos: pos.parse().map_err(|_| invalid())?,
        })
    }
}

/// Number of markable positions in the document
pub fn total_positions(lines: &[LineScan]) -> usize {
    lines.iter().map(|line| line.positions.len()).sum()
}

/// Flatten `(line, pos)` into a global index
pub fn to_global(lines: &[LineScan], at: SyllableRef) -> usize {
    let before: usize = lines
        .iter()
        .take(at.line)
        .map(|line| line.positions.len())
        .sum();
    before + at.pos
}

/// Resolve a global index back to `(line, pos)`; `None` when out of range
pub fn from_global(lines: &[LineScan], cursor: usize) -> Option<SyllableRef> {
    let mut count = 0;
    for (line_index, line) in lines.iter().enumerate() {
        let len = line.positions.len();
        if cursor < count + len {
            return Some(SyllableRef::new(line_index, cursor - count));
        }
        count += len;
    }
    None
}
