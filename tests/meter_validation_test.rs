// Meter validation through a full document

use scansion_wasm::diagnostics::{line_errors, position_has_error, validate_document};
use scansion_wasm::models::{Mark, MeterKind};
use scansion_wasm::parse::scan_document;
use scansion_wasm::text::{MarkLayer, SyllableRef};

fn marks(codes: &str) -> Vec<(usize, Mark)> {
    codes.chars().map(Mark::from_char).enumerate().collect()
}

#[test]
fn test_dactylic_examples() {
    assert_eq!(line_errors(4, &marks("-uu-"), MeterKind::Dactylic), vec![false; 4]);

    let errors = line_errors(3, &marks("-u-"), MeterKind::Dactylic);
    assert_eq!(errors, vec![false, false, true]);

    let errors = line_errors(5, &marks("u-uu-"), MeterKind::Dactylic);
    assert!(errors[0]);
    assert!(!errors[2] && !errors[3] && !errors[4]);
}

#[test]
fn test_iambo_trochaic_examples() {
    assert_eq!(line_errors(4, &marks("ABCD"), MeterKind::IamboTrochaic), vec![false; 4]);
    assert_eq!(line_errors(2, &marks("AA"), MeterKind::IamboTrochaic), vec![false, true]);
    assert!(position_has_error(1, &marks("b"), 0, MeterKind::IamboTrochaic));
}

#[test]
fn test_hexameter_line() {
    // Arma virumque cano, Troiae qui primus ab oris
    let lines = scan_document("Arma virumque cano, Troiae qui primus ab oris");
    let scansion = "-uu-uu----uu--";
    assert_eq!(lines[0].positions.len(), 16);

    let mut layer = MarkLayer::new();
    for (pos, ch) in scansion.chars().enumerate() {
        layer.set(SyllableRef::new(0, pos), Mark::from_char(ch));
    }

    let diagnostics = validate_document(&lines, &layer, MeterKind::Dactylic);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.marks);
}

#[test]
fn test_errors_are_per_line() {
    let lines = scan_document("arma\nvirum");
    let mut layer = MarkLayer::new();
    layer.set(SyllableRef::new(0, 0), Mark::Long);
    layer.set(SyllableRef::new(0, 1), Mark::Short);
    // a new line starts fresh: the open short above does not carry over
    layer.set(SyllableRef::new(1, 0), Mark::Long);

    let diagnostics = validate_document(&lines, &layer, MeterKind::Dactylic);
    assert!(diagnostics.is_empty());

    layer.set(SyllableRef::new(1, 0), Mark::Short);
    let diagnostics = validate_document(&lines, &layer, MeterKind::Dactylic);
    assert!(diagnostics.has_error_at(1, 0));
    assert!(!diagnostics.has_error_at(0, 1));
}

#[test]
fn test_other_meter_accepts_anything() {
    let lines = scan_document("arma virum");
    let mut layer = MarkLayer::new();
    layer.set(SyllableRef::new(0, 0), Mark::Short);
    layer.set(SyllableRef::new(0, 1), Mark::from_char('d'));

    assert!(validate_document(&lines, &layer, MeterKind::Other).is_empty());
    assert!(validate_document(&lines, &layer, MeterKind::IamboTrochaic).has_errors());
}
