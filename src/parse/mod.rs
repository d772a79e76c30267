//! Parsing module for the scansion editor
//!
//! Turns raw text into syllable positions: character classification,
//! position extraction and the cleaning applied to incoming text.

pub mod intake;
pub mod syllables;
pub mod vowels;

// Re-export commonly used functions
pub use intake::{clean_text, normalize_spaces, paste_document_name, prepare_paste};
pub use syllables::{scan_document, scan_line};
pub use vowels::{base_vowel, has_accent, has_breathing, has_diaeresis, is_true_diphthong, is_vowel};
