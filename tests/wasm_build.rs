//! WASM build test
//!
//! Checks that the JavaScript-facing API works inside a browser.

#![cfg(target_arch = "wasm32")]

use scansion_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_document() -> JsValue {
    let library = library_add_upload(None, "aeneid.txt", "arma virum\ncano").unwrap();
    let json = js_sys::Reflect::get(&library, &JsValue::from_str("library"))
        .unwrap()
        .as_string()
        .unwrap();
    let id = js_sys::Reflect::get(&library, &JsValue::from_str("id"))
        .unwrap()
        .as_string()
        .unwrap();
    library_get(Some(json), &id).unwrap()
}

#[wasm_bindgen_test]
fn test_editor_creation() {
    let editor = ScansionEditor::new();
    assert!(!editor.has_document());
    assert!(editor.cursor().is_err());
}

#[wasm_bindgen_test]
fn test_open_and_type() {
    let mut editor = ScansionEditor::new();
    editor.open_document(sample_document()).unwrap();
    assert_eq!(editor.total_positions().unwrap(), 6);

    editor.handle_key("-").unwrap();
    editor.handle_key("u").unwrap();
    assert_eq!(editor.cursor().unwrap(), 2);

    let transcript = editor.export_transcript().unwrap();
    assert!(transcript.starts_with("\u{2012}  \u{222A}"));
    assert!(editor.transcript_file_name().unwrap().ends_with("_aeneid.mtr.txt"));
}

#[wasm_bindgen_test]
fn test_set_meter() {
    let mut editor = ScansionEditor::new();
    editor.open_document(sample_document()).unwrap();

    assert!(editor.set_meter("dactylic").unwrap());
    assert_eq!(editor.meter().unwrap(), "dactylic");
    assert!(editor.set_meter("sapphic").is_err());
}

#[wasm_bindgen_test]
fn test_empty_paste_is_rejected() {
    assert!(prepare_paste("   ").is_err());
    assert!(library_add_paste(None, "\n\t").is_err());
    assert_eq!(clean_text("a\n\n b"), "a\n b");
}
