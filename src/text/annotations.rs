//! Mark layer: scansion marks stored apart from the text
//!
//! Marks are sparse and keyed by syllable position, grouped per line so the
//! validator can walk one line's marks in order. The flat `"line-pos"` key
//! format only exists at the serde boundary, where it keeps the persisted
//! document shape stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cursor::SyllableRef;
use crate::errors::ScansionError;
use crate::models::Mark;

/// Sparse marks, line index -> position index -> mark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Mark>", into = "BTreeMap<String, Mark>")]
pub struct MarkLayer {
    lines: BTreeMap<usize, BTreeMap<usize, Mark>>,
}

impl MarkLayer {
    pub fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Get the mark at a position
    pub fn get(&self, at: SyllableRef) -> Option<Mark> {
        self.lines.get(&at.line)?.get(&at.pos).copied()
    }

    /// Assign a mark, returning the one it replaced
    pub fn set(&mut self, at: SyllableRef, mark: Mark) -> Option<Mark> {
        self.lines.entry(at.line).or_default().insert(at.pos, mark)
    }

    /// Remove the mark at a position entirely
    pub fn clear(&mut self, at: SyllableRef) -> Option<Mark> {
        let line = self.lines.get_mut(&at.line)?;
        let removed = line.remove(&at.pos);
        if line.is_empty() {
            self.lines.remove(&at.line);
        }
        removed
    }

    /// Marks of one line ordered by position; unmarked positions are absent
    pub fn line(&self, line: usize) -> Vec<(usize, Mark)> {
        self.lines
            .get(&line)
            .map(|marks| marks.iter().map(|(pos, mark)| (*pos, *mark)).collect())
            .unwrap_or_default()
    }

    /// All marks in document order
    pub fn iter(&self) -> impl Iterator<Item = (SyllableRef, Mark)> + '_ {
        self.lines.iter().flat_map(|(line, marks)| {
            marks
                .iter()
                .map(move |(pos, mark)| (SyllableRef::new(*line, *pos), *mark))
        })
    }

    pub fn len(&self) -> usize {
        self.lines.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<MarkLayer> for BTreeMap<String, Mark> {
    fn from(layer: MarkLayer) -> Self {
        layer.iter().map(|(at, mark)| (at.to_string(), mark)).collect()
    }
}

impl TryFrom<BTreeMap<String, Mark>> for MarkLayer {
    type Error = ScansionError;

    fn try_from(keyed: BTreeMap<String, Mark>) -> Result<Self, Self::Error> {
        let mut layer = MarkLayer::new();
        for (key, mark) in keyed {
            layer.set(key.parse()?, mark);
        }
        Ok(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut marks = MarkLayer::new();
        let at = SyllableRef::new(0, 2);

        assert_eq!(marks.set(at, Mark::Long), None);
        assert_eq!(marks.set(at, Mark::Short), Some(Mark::Long));
        assert_eq!(marks.get(at), Some(Mark::Short));

        assert_eq!(marks.clear(at), Some(Mark::Short));
        assert_eq!(marks.get(at), None);
        assert!(marks.is_empty());
        assert_eq!(marks.clear(at), None);
    }

    #[test]
    fn test_line_is_ordered_and_sparse() {
        let mut marks = MarkLayer::new();
        marks.set(SyllableRef::new(1, 5), Mark::Long);
        marks.set(SyllableRef::new(1, 0), Mark::Short);
        marks.set(SyllableRef::new(3, 1), Mark::Long);

        assert_eq!(marks.line(1), vec![(0, Mark::Short), (5, Mark::Long)]);
        assert!(marks.line(2).is_empty());
        assert_eq!(marks.len(), 3);
    }

    #[test]
    fn test_persisted_shape() {
        let mut marks = MarkLayer::new();
        marks.set(SyllableRef::new(0, 1), Mark::Long);
        marks.set(SyllableRef::new(10, 0), Mark::from_char('b'));

        let json = serde_json::to_value(&marks).unwrap();
        assert_eq!(json, serde_json::json!({"0-1": "-", "10-0": "b"}));

        let back: MarkLayer = serde_json::from_value(json).unwrap();
        assert_eq!(back, marks);
    }

    #[test]
    fn test_bad_key_is_rejected() {
        let result: Result<MarkLayer, _> = serde_json::from_str(r#"{"zero-1": "-"}"#);
        assert!(result.is_err());
    }
}
