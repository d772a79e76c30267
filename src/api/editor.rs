//! Scansion editor WASM API
//!
//! `ScansionEditor` owns the session of the open document. JavaScript keeps
//! one instance, forwards key presses and clicks to it, and redraws from the
//! returned marks display. Whenever a call reports a change, JavaScript
//! stores `document()` back into the library.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, scansion_error, serialize, validation_error};
use crate::models::{Document, EditCommand, MeterKind, ScansionSession};
use crate::renderers::render_marks_rows;
use crate::text::SyllableRef;
use crate::transcript::transcript_file_name;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Result of a key press handed back to JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyResult {
    /// False for keys the editor ignores, so the browser keeps its default
    handled: bool,
    marks_changed: bool,
    cursor: usize,
}

#[wasm_bindgen]
pub struct ScansionEditor {
    session: Option<ScansionSession>,
}

impl ScansionEditor {
    fn session(&self) -> Result<&ScansionSession, JsValue> {
        self.session
            .as_ref()
            .ok_or_else(|| validation_error("No document is open"))
    }

    fn session_mut(&mut self) -> Result<&mut ScansionSession, JsValue> {
        self.session
            .as_mut()
            .ok_or_else(|| validation_error("No document is open"))
    }
}

impl Default for ScansionEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ScansionEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScansionEditor {
        ScansionEditor { session: None }
    }

    /// Open a stored document and return its marks display
    #[wasm_bindgen(js_name = openDocument)]
    pub fn open_document(&mut self, document_js: JsValue) -> Result<JsValue, JsValue> {
        let document: Document = deserialize(document_js, "Invalid document")?;
        wasm_info!("openDocument: '{}'", document.name);

        let session = ScansionSession::new(document);
        wasm_log!("  {} syllable positions", session.total_positions());
        let display = render_marks_rows(&session);
        self.session = Some(session);

        serialize(&display, "Failed to serialize marks display")
    }

    #[wasm_bindgen(js_name = closeDocument)]
    pub fn close_document(&mut self) {
        self.session = None;
    }

    #[wasm_bindgen(js_name = hasDocument)]
    pub fn has_document(&self) -> bool {
        self.session.is_some()
    }

    /// Apply a `KeyboardEvent.key` value
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let session = self.session_mut()?;

        let result = match EditCommand::from_key(key) {
            Some(command) => {
                let outcome = session.apply(command);
                KeyResult {
                    handled: true,
                    marks_changed: outcome.marks_changed,
                    cursor: outcome.cursor,
                }
            }
            None => KeyResult {
                handled: false,
                marks_changed: false,
                cursor: session.cursor(),
            },
        };

        serialize(&result, "Failed to serialize key result")
    }

    /// Move the cursor to a clicked mark
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, line: usize, pos: usize) -> Result<bool, JsValue> {
        let session = self.session_mut()?;
        let jumped = session.jump_to(SyllableRef::new(line, pos));
        if !jumped {
            wasm_warn!("jumpTo: no syllable at {}-{}", line, pos);
        }
        Ok(jumped)
    }

    /// Change the meter; returns true when the document must be saved
    #[wasm_bindgen(js_name = setMeter)]
    pub fn set_meter(&mut self, meter: &str) -> Result<bool, JsValue> {
        let meter: MeterKind = meter.parse().map_err(scansion_error)?;
        wasm_info!("setMeter: {}", meter);
        Ok(self.session_mut()?.set_meter(meter))
    }

    #[wasm_bindgen(js_name = getMeter)]
    pub fn meter(&self) -> Result<String, JsValue> {
        Ok(self.session()?.meter().to_string())
    }

    #[wasm_bindgen(js_name = getCursor)]
    pub fn cursor(&self) -> Result<usize, JsValue> {
        Ok(self.session()?.cursor())
    }

    #[wasm_bindgen(js_name = totalPositions)]
    pub fn total_positions(&self) -> Result<usize, JsValue> {
        Ok(self.session()?.total_positions())
    }

    /// The document as stored (name, content, marks, meter)
    #[wasm_bindgen(js_name = getDocument)]
    pub fn document(&self) -> Result<JsValue, JsValue> {
        serialize(self.session()?.document(), "Failed to serialize document")
    }

    /// Marks rows for every line
    #[wasm_bindgen(js_name = renderMarks)]
    pub fn render_marks(&self) -> Result<JsValue, JsValue> {
        serialize(&render_marks_rows(self.session()?), "Failed to serialize marks display")
    }

    /// Meter diagnostics explaining each flagged position
    #[wasm_bindgen(js_name = getDiagnostics)]
    pub fn diagnostics(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session()?.diagnostics(), "Failed to serialize diagnostics")
    }

    #[wasm_bindgen(js_name = exportTranscript)]
    pub fn export_transcript(&self) -> Result<String, JsValue> {
        let session = self.session()?;
        wasm_info!("exportTranscript: '{}'", session.document().name);
        Ok(session.export_transcript())
    }

    /// Download name for the transcript, stamped with the local time
    #[wasm_bindgen(js_name = transcriptFileName)]
    pub fn transcript_file_name(&self) -> Result<String, JsValue> {
        let now = chrono::Local::now().naive_local();
        Ok(transcript_file_name(&self.session()?.document().name, now))
    }
}
