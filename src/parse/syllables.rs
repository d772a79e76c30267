//! Syllable position extraction
//!
//! Walks a line left to right and records one position per syllable
//! nucleus. A diphthong becomes a single position anchored on its second
//! vowel; the `u` of `qu` is a glide and never markable.
//!
//! Indices count chars of the NFC-normalized line. Re-scanning identical
//! text always yields identical positions, which is what keeps persisted
//! `line-pos` mark keys valid across reloads.

use unicode_normalization::UnicodeNormalization;

use super::vowels::{is_true_diphthong, is_vowel};
use crate::models::{LineScan, SyllablePosition};

/// Extract the markable positions of one (already normalized) line
pub fn scan_line(line: &str) -> Vec<SyllablePosition> {
    let chars: Vec<char> = line.chars().collect();
    let mut positions = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if i > 0 && ch.eq_ignore_ascii_case(&'u') && chars[i - 1].eq_ignore_ascii_case(&'q') {
            i += 1;
            continue;
        }

        if let Some(&next) = chars.get(i + 1) {
            if is_vowel(ch) && is_vowel(next) && is_true_diphthong(ch, next) {
                positions.push(SyllablePosition {
                    char: next,
                    index: i + 1,
                    is_diphthong: true,
                });
                i += 2;
                continue;
            }
        }

        if is_vowel(ch) {
            positions.push(SyllablePosition {
                char: ch,
                index: i,
                is_diphthong: false,
            });
        }
        i += 1;
    }

    positions
}

/// Normalize a whole document to NFC, split it into lines and scan each one
pub fn scan_document(content: &str) -> Vec<LineScan> {
    let normalized: String = content.nfc().collect();

    let lines: Vec<LineScan> = normalized
        .split('\n')
        .enumerate()
        .map(|(line_index, line_text)| LineScan {
            line_index,
            line_text: line_text.to_string(),
            positions: scan_line(line_text),
        })
        .collect();

    log::debug!(
        "scanned {} lines, {} positions",
        lines.len(),
        lines.iter().map(|l| l.positions.len()).sum::<usize>()
    );

    lines
}
