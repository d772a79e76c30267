//! Meter diagnostics - checks a line's marks against a metrical grammar
//!
//! Only marked positions take part: a line's marks are read left to right
//! with unmarked positions skipped, so gaps never break a sequence.
//!
//! Dactylic lines must open long, shorts come in pairs, and a pair of shorts
//! must be followed by a long. Iambo-trochaic lines carry metron letters
//! that advance A→B→C→D→A, with `b`/`d` allowed only as exact pairs.

use crate::models::{LineScan, Mark, MeterKind};
use crate::text::annotations::MarkLayer;

use super::DiagnosticMark;

/// Adjacent (previous, current) pairs that may never occur
const FORBIDDEN_PAIRS: &[(char, char)] = &[
    ('A', 'A'),
    ('B', 'B'),
    ('C', 'C'),
    ('D', 'D'),
    ('A', 'a'),
    ('a', 'A'),
    ('B', 'b'),
    ('b', 'B'),
    ('C', 'c'),
    ('c', 'C'),
    ('D', 'd'),
    ('d', 'D'),
];

/// Marks that may not open an iambo-trochaic line
const FORBIDDEN_OPENERS: &[char] = &['C', 'c', 'D', 'd'];

/// Marks that must occur as exactly two in a row
const PAIRED_MARKS: &[char] = &['b', 'd'];

/// Why a mark breaks the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterViolation {
    /// Dactylic line opening with anything but a long
    MustOpenLong,
    /// A short neither paired nor completing a pair
    UnpairedShort,
    /// Two shorts not followed by a long
    LongAfterShorts,
    /// `b`/`d` with no partner
    IsolatedPair,
    /// Third or later `b`/`d` in a row
    OverlongPair,
    /// Iambo-trochaic line opening in the second half of a metron
    MidMetronStart,
    /// Same letter repeated across case, or an upper-case repeat
    ForbiddenRepeat,
    /// Letter type not advancing along A→B→C→D→A
    OutOfSequence,
}

impl MeterViolation {
    pub fn kind(self) -> &'static str {
        match self {
            MeterViolation::MustOpenLong => "meter_must_open_long",
            MeterViolation::UnpairedShort => "meter_unpaired_short",
            MeterViolation::LongAfterShorts => "meter_long_after_shorts",
            MeterViolation::IsolatedPair => "meter_isolated_pair",
            MeterViolation::OverlongPair => "meter_overlong_pair",
            MeterViolation::MidMetronStart => "meter_mid_metron_start",
            MeterViolation::ForbiddenRepeat => "meter_forbidden_repeat",
            MeterViolation::OutOfSequence => "meter_out_of_sequence",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MeterViolation::MustOpenLong => "Line must begin with a long",
            MeterViolation::UnpairedShort => "Single short not followed by another short",
            MeterViolation::LongAfterShorts => "Two shorts must be followed by a long",
            MeterViolation::IsolatedPair => "b and d must come in pairs",
            MeterViolation::OverlongPair => "More than two b or d in a row",
            MeterViolation::MidMetronStart => "Line must not begin with C or D",
            MeterViolation::ForbiddenRepeat => "Forbidden repetition of the same position",
            MeterViolation::OutOfSequence => "Positions must advance A, B, C, D",
        }
    }
}

/// First rule broken by the mark at `index` of a line's non-empty marks
fn violation_at(marks: &[Mark], index: usize, meter: MeterKind) -> Option<MeterViolation> {
    match meter {
        MeterKind::Other => None,
        MeterKind::Dactylic => dactylic_violation(marks, index),
        MeterKind::IamboTrochaic => iambo_trochaic_violation(marks, index),
    }
}

fn dactylic_violation(marks: &[Mark], index: usize) -> Option<MeterViolation> {
    let current = marks[index];
    let prev = index.checked_sub(1).map(|i| marks[i]);
    let prev_prev = index.checked_sub(2).map(|i| marks[i]);

    if index == 0 && current != Mark::Long {
        return Some(MeterViolation::MustOpenLong);
    }

    // a short must be followed by a short, unless it completes `u u`
    if prev == Some(Mark::Short) && current != Mark::Short && prev_prev != Some(Mark::Short) {
        return Some(MeterViolation::UnpairedShort);
    }

    if prev == Some(Mark::Short) && prev_prev == Some(Mark::Short) && current != Mark::Long {
        return Some(MeterViolation::LongAfterShorts);
    }

    None
}

fn iambo_trochaic_violation(marks: &[Mark], index: usize) -> Option<MeterViolation> {
    let code = |i: usize| marks[i].as_char();
    let current = code(index);
    let prev = index.checked_sub(1).map(code);
    let prev_prev = index.checked_sub(2).map(code);
    let next = marks.get(index + 1).map(|m| m.as_char());

    if PAIRED_MARKS.contains(&current) {
        let has_prev = prev == Some(current);
        let has_next = next == Some(current);

        if !has_prev && !has_next {
            return Some(MeterViolation::IsolatedPair);
        }
        if has_prev && has_next {
            return Some(MeterViolation::OverlongPair);
        }
        if has_prev && prev_prev == Some(current) {
            return Some(MeterViolation::OverlongPair);
        }
    }

    if index == 0 && FORBIDDEN_OPENERS.contains(&current) {
        return Some(MeterViolation::MidMetronStart);
    }

    let prev_mark = marks[index.checked_sub(1)?];
    let prev = prev_mark.as_char();

    if FORBIDDEN_PAIRS.contains(&(prev, current)) {
        return Some(MeterViolation::ForbiddenRepeat);
    }

    if let (Some(from), Some(to)) = (prev_mark.metron_letter(), marks[index].metron_letter()) {
        if from != to && from.next() != to {
            return Some(MeterViolation::OutOfSequence);
        }
    }

    None
}

/// Collect a line's non-empty marks in position order.
///
/// Marks keyed past the line's last position belong to no syllable and are
/// left out, so they can never pair with or sequence against real marks.
fn ordered_marks(position_count: usize, line_marks: &[(usize, Mark)]) -> (Vec<usize>, Vec<Mark>) {
    let mut sorted: Vec<(usize, Mark)> = line_marks
        .iter()
        .copied()
        .filter(|(pos, _)| *pos < position_count)
        .collect();
    sorted.sort_by_key(|(pos, _)| *pos);
    sorted.into_iter().unzip()
}

/// Whether the mark at `pos` breaks the meter.
///
/// `line_marks` holds the line's marked positions; an unmarked `pos` is
/// never in error.
pub fn position_has_error(
    position_count: usize,
    line_marks: &[(usize, Mark)],
    pos: usize,
    meter: MeterKind,
) -> bool {
    let (positions, marks) = ordered_marks(position_count, line_marks);
    positions
        .iter()
        .position(|p| *p == pos)
        .and_then(|index| violation_at(&marks, index, meter))
        .is_some()
}

/// Error flag for every position of a line
pub fn line_errors(position_count: usize, line_marks: &[(usize, Mark)], meter: MeterKind) -> Vec<bool> {
    let mut errors = vec![false; position_count];
    let (positions, marks) = ordered_marks(position_count, line_marks);
    for (index, pos) in positions.iter().enumerate() {
        if violation_at(&marks, index, meter).is_some() {
            errors[*pos] = true;
        }
    }
    errors
}

/// Analyze one line's marks, returning a diagnostic per offending position
pub fn analyze_line(
    position_count: usize,
    line_marks: &[(usize, Mark)],
    line_index: usize,
    meter: MeterKind,
) -> Vec<DiagnosticMark> {
    let (positions, marks) = ordered_marks(position_count, line_marks);
    positions
        .iter()
        .enumerate()
        .filter_map(|(index, pos)| {
            violation_at(&marks, index, meter).map(|violation| {
                DiagnosticMark::new(line_index, *pos, violation.kind(), violation.message())
            })
        })
        .collect()
}

/// Analyze every line of a document
///
/// Each line is validated independently; marks never carry across lines.
pub fn analyze_document_meter(lines: &[LineScan], marks: &MarkLayer, meter: MeterKind) -> Vec<DiagnosticMark> {
    let mut all_marks = Vec::new();

    if meter == MeterKind::Other {
        return all_marks;
    }

    for line in lines {
        all_marks.extend(analyze_line(
            line.positions.len(),
            &marks.line(line.line_index),
            line.line_index,
            meter,
        ));
    }

    all_marks
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Marks on consecutive positions 0, 1, 2, ...
    fn seq(codes: &str) -> Vec<(usize, Mark)> {
        codes.chars().map(Mark::from_char).enumerate().collect()
    }

    fn errors(codes: &str, meter: MeterKind) -> Vec<bool> {
        let marks = seq(codes);
        line_errors(marks.len(), &marks, meter)
    }

    #[test]
    fn test_other_meter_never_errors() {
        assert_eq!(errors("uuuCx", MeterKind::Other), vec![false; 5]);
    }

    #[test]
    fn test_dactylic_valid_line() {
        assert_eq!(errors("-uu-", MeterKind::Dactylic), vec![false; 4]);
        assert_eq!(errors("-uu-uu-----uu--", MeterKind::Dactylic), vec![false; 15]);
    }

    #[test]
    fn test_dactylic_single_short() {
        assert_eq!(errors("-u-", MeterKind::Dactylic), vec![false, false, true]);
    }

    #[test]
    fn test_dactylic_must_open_long() {
        assert_eq!(
            errors("u-uu-", MeterKind::Dactylic),
            vec![true, true, false, false, false]
        );
    }

    #[test]
    fn test_dactylic_three_shorts() {
        assert_eq!(errors("-uuu", MeterKind::Dactylic), vec![false, false, false, true]);
    }

    #[test]
    fn test_dactylic_irregular_falls_through() {
        // x opening a line is not a long
        assert_eq!(errors("x", MeterKind::Dactylic), vec![true]);
        // x after a single short is an unpaired short
        assert_eq!(errors("-ux", MeterKind::Dactylic), vec![false, false, true]);
        // x after a long is not checked
        assert_eq!(errors("-x", MeterKind::Dactylic), vec![false, false]);
    }

    #[test]
    fn test_gaps_are_invisible() {
        // marks at positions 0, 3, 4, 7 of an 8-position line
        let marks = vec![
            (0, Mark::Long),
            (3, Mark::Short),
            (4, Mark::Short),
            (7, Mark::Long),
        ];
        assert_eq!(line_errors(8, &marks, MeterKind::Dactylic), vec![false; 8]);

        let marks = vec![(1, Mark::Long), (5, Mark::Short), (6, Mark::Long)];
        assert!(position_has_error(8, &marks, 6, MeterKind::Dactylic));
        assert!(!position_has_error(8, &marks, 5, MeterKind::Dactylic));
        assert!(!position_has_error(8, &marks, 2, MeterKind::Dactylic));
    }

    #[test]
    fn test_iambo_trochaic_cycle() {
        assert_eq!(errors("ABCD", MeterKind::IamboTrochaic), vec![false; 4]);
        assert_eq!(errors("ABCDABCD", MeterKind::IamboTrochaic), vec![false; 8]);
        assert_eq!(errors("aBcD", MeterKind::IamboTrochaic), vec![false; 4]);
        assert_eq!(errors("AC", MeterKind::IamboTrochaic), vec![false, true]);
        assert_eq!(errors("BA", MeterKind::IamboTrochaic), vec![false, true]);
    }

    #[test]
    fn test_iambo_trochaic_forbidden_repeats() {
        assert_eq!(errors("AA", MeterKind::IamboTrochaic), vec![false, true]);
        assert_eq!(errors("Aa", MeterKind::IamboTrochaic), vec![false, true]);
        assert_eq!(errors("aA", MeterKind::IamboTrochaic), vec![false, true]);
        // lower-case repeat of the same letter is allowed
        assert_eq!(errors("aa", MeterKind::IamboTrochaic), vec![false, false]);
    }

    #[test]
    fn test_iambo_trochaic_pairs() {
        assert_eq!(errors("b", MeterKind::IamboTrochaic), vec![true]);
        assert_eq!(errors("Abb", MeterKind::IamboTrochaic), vec![false; 3]);
        assert_eq!(errors("Abbb", MeterKind::IamboTrochaic), vec![false, false, true, true]);
        assert_eq!(errors("AbC", MeterKind::IamboTrochaic), vec![false, true, false]);
        assert_eq!(errors("ABCdd", MeterKind::IamboTrochaic), vec![false; 5]);
    }

    #[test]
    fn test_iambo_trochaic_mid_metron_start() {
        assert_eq!(errors("CD", MeterKind::IamboTrochaic), vec![true, false]);
        assert_eq!(errors("dd", MeterKind::IamboTrochaic), vec![true, false]);
        assert_eq!(errors("BCD", MeterKind::IamboTrochaic), vec![false; 3]);
    }

    #[test]
    fn test_iambo_trochaic_ignores_non_letters() {
        assert_eq!(errors("A-C", MeterKind::IamboTrochaic), vec![false; 3]);
    }

    #[test]
    fn test_marks_past_the_last_position_are_ignored() {
        // "arma" has two positions; a mark keyed at 5 belongs to no syllable
        let marks = vec![
            (0, Mark::from_char('A')),
            (1, Mark::from_char('b')),
            (5, Mark::from_char('b')),
        ];
        assert_eq!(line_errors(2, &marks, MeterKind::IamboTrochaic), vec![false, true]);
        assert!(position_has_error(2, &marks, 1, MeterKind::IamboTrochaic));
        assert!(!position_has_error(2, &marks, 5, MeterKind::IamboTrochaic));

        let diags = analyze_line(2, &marks, 0, MeterKind::IamboTrochaic);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].pos, 1);
        assert_eq!(diags[0].kind, "meter_isolated_pair");
    }

    #[test]
    fn test_analyze_document_reports_kinds() {
        let lines = crate::parse::scan_document("arma\nvirum");
        let mut marks = MarkLayer::new();
        marks.set(crate::text::SyllableRef::new(1, 0), Mark::Short);

        let diags = analyze_document_meter(&lines, &marks, MeterKind::Dactylic);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].pos, 0);
        assert_eq!(diags[0].kind, "meter_must_open_long");

        assert!(analyze_document_meter(&lines, &marks, MeterKind::Other).is_empty());
    }
}
