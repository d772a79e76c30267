//! Core data structures for the scansion editor
//!
//! Marks, meters, derived syllable positions and the persisted document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScansionError;
use crate::text::annotations::MarkLayer;

/// Glyph written for a long mark in transcripts and the marks row
pub const LONG_GLYPH: char = '\u{2012}';
/// Glyph written for a short mark
pub const SHORT_GLYPH: char = '\u{222A}';
/// Glyph written for an irregular mark
pub const IRREGULAR_GLYPH: char = '\u{00D7}';

/// Position label inside an iambo-trochaic metron
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetronLetter {
    A,
    B,
    C,
    D,
}

impl MetronLetter {
    /// The letter that must follow this one when the type changes
    pub fn next(self) -> Self {
        match self {
            MetronLetter::A => MetronLetter::B,
            MetronLetter::B => MetronLetter::C,
            MetronLetter::C => MetronLetter::D,
            MetronLetter::D => MetronLetter::A,
        }
    }

    fn from_char(ch: char) -> Option<(Self, bool)> {
        let letter = match ch.to_ascii_uppercase() {
            'A' => MetronLetter::A,
            'B' => MetronLetter::B,
            'C' => MetronLetter::C,
            'D' => MetronLetter::D,
            _ => return None,
        };
        Some((letter, ch.is_ascii_uppercase()))
    }

    fn to_char(self, upper: bool) -> char {
        let ch = match self {
            MetronLetter::A => 'A',
            MetronLetter::B => 'B',
            MetronLetter::C => 'C',
            MetronLetter::D => 'D',
        };
        if upper {
            ch
        } else {
            ch.to_ascii_lowercase()
        }
    }
}

/// A scansion mark assigned to one syllable position.
///
/// Persisted as a one-character string (`"-"`, `"u"`, `"x"`, `"A"` ... `"d"`).
/// Characters outside that alphabet can only arrive through transcript
/// import and are kept as [`Mark::Other`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Mark {
    Long,
    Short,
    Irregular,
    Metron { letter: MetronLetter, upper: bool },
    Other(char),
}

impl Mark {
    /// Interpret any character as a mark
    pub fn from_char(ch: char) -> Self {
        match ch {
            '-' => Mark::Long,
            'u' => Mark::Short,
            'x' => Mark::Irregular,
            _ => match MetronLetter::from_char(ch) {
                Some((letter, upper)) => Mark::Metron { letter, upper },
                None => Mark::Other(ch),
            },
        }
    }

    /// Mark typed from the keyboard; only the fixed alphabet is accepted
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match Mark::from_char(ch) {
            Mark::Other(_) => None,
            mark => Some(mark),
        }
    }

    /// Read a mark back from a transcript marks-line character
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            LONG_GLYPH => Mark::Long,
            SHORT_GLYPH => Mark::Short,
            IRREGULAR_GLYPH => Mark::Irregular,
            other => Mark::from_char(other),
        }
    }

    /// The persisted one-character code
    pub fn as_char(self) -> char {
        match self {
            Mark::Long => '-',
            Mark::Short => 'u',
            Mark::Irregular => 'x',
            Mark::Metron { letter, upper } => letter.to_char(upper),
            Mark::Other(ch) => ch,
        }
    }

    /// The character shown under the text
    pub fn glyph(self) -> char {
        match self {
            Mark::Long => LONG_GLYPH,
            Mark::Short => SHORT_GLYPH,
            Mark::Irregular => IRREGULAR_GLYPH,
            other => other.as_char(),
        }
    }

    /// Metron letter type, ignoring case
    pub fn metron_letter(self) -> Option<MetronLetter> {
        match self {
            Mark::Metron { letter, .. } => Some(letter),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.as_char().to_string()
    }
}

impl TryFrom<String> for Mark {
    type Error = ScansionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Mark::from_char(ch)),
            _ => Err(ScansionError::InvalidMark(value)),
        }
    }
}

/// Metrical grammar used to validate a document's marks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeterKind {
    #[serde(rename = "dactylic")]
    Dactylic,
    #[serde(rename = "iambo-trochaic")]
    IamboTrochaic,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl MeterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MeterKind::Dactylic => "dactylic",
            MeterKind::IamboTrochaic => "iambo-trochaic",
            MeterKind::Other => "other",
        }
    }
}

impl fmt::Display for MeterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeterKind {
    type Err = ScansionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dactylic" => Ok(MeterKind::Dactylic),
            "iambo-trochaic" => Ok(MeterKind::IamboTrochaic),
            "other" => Ok(MeterKind::Other),
            _ => Err(ScansionError::UnknownMeter(s.to_string())),
        }
    }
}

/// One markable syllable nucleus in a line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyllablePosition {
    /// The vowel recorded (second vowel for a diphthong)
    pub char: char,

    /// Offset into the line, counted in chars
    pub index: usize,

    pub is_diphthong: bool,
}

/// A line of text together with its derived syllable positions
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LineScan {
    pub line_index: usize,
    pub line_text: String,
    pub positions: Vec<SyllablePosition>,
}

/// A stored text with its marks and chosen meter
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub name: String,

    /// Raw text, one verse per line
    pub content: String,

    #[serde(default)]
    pub marks: MarkLayer,

    #[serde(default)]
    pub meter: MeterKind,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            marks: MarkLayer::new(),
            meter: MeterKind::Other,
        }
    }
}
