//! Library WASM API
//!
//! JavaScript keeps the library as a JSON string in `localStorage`. Each
//! call takes the stored string, applies one change and hands back the new
//! string to store, so Rust never holds the library between calls.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, new_document_id, scansion_error, serialize};
use crate::models::{Document, Library};
use crate::parse;
use crate::transcript::import_transcript;
use crate::wasm_info;

/// Library after an insertion, with the new document's id
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryUpdate {
    library: String,
    id: String,
}

/// Entry for the document list
#[derive(Serialize)]
struct LibraryEntry<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct PastedText {
    name: String,
    content: String,
}

fn load(library_json: Option<String>) -> Result<Library, JsValue> {
    Library::load(library_json.as_deref()).map_err(scansion_error)
}

fn store(library: &Library) -> Result<String, JsValue> {
    library.to_json().map_err(scansion_error)
}

fn update(library: &Library, id: String) -> Result<JsValue, JsValue> {
    let update = LibraryUpdate {
        library: store(library)?,
        id,
    };
    serialize(&update, "Failed to serialize library update")
}

/// Clean uploaded text (spaces normalised, blank lines removed)
#[wasm_bindgen(js_name = cleanText)]
pub fn clean_text(text: &str) -> String {
    parse::clean_text(text)
}

/// Name and content for pasted text; fails on an empty paste
#[wasm_bindgen(js_name = preparePaste)]
pub fn prepare_paste(raw: &str) -> Result<JsValue, JsValue> {
    let (name, content) = parse::prepare_paste(raw).map_err(scansion_error)?;
    serialize(&PastedText { name, content }, "Failed to serialize pasted text")
}

/// Read a transcript file into a document with realigned marks
#[wasm_bindgen(js_name = importTranscript)]
pub fn import_transcript_document(file_name: &str, raw: &str) -> Result<JsValue, JsValue> {
    let document = import_transcript(file_name, raw);
    serialize(&document, "Failed to serialize imported document")
}

#[wasm_bindgen(js_name = libraryAddUpload)]
pub fn library_add_upload(
    library_json: Option<String>,
    file_name: &str,
    raw: &str,
) -> Result<JsValue, JsValue> {
    let mut library = load(library_json)?;
    let id = new_document_id();
    wasm_info!("libraryAddUpload: '{}' as {}", file_name, id);
    library.add_upload(&id, file_name, raw);
    update(&library, id)
}

#[wasm_bindgen(js_name = libraryAddPaste)]
pub fn library_add_paste(library_json: Option<String>, raw: &str) -> Result<JsValue, JsValue> {
    let mut library = load(library_json)?;
    let id = new_document_id();
    library.add_paste(&id, raw).map_err(scansion_error)?;
    wasm_info!("libraryAddPaste: stored as {}", id);
    update(&library, id)
}

#[wasm_bindgen(js_name = libraryAddTranscript)]
pub fn library_add_transcript(
    library_json: Option<String>,
    file_name: &str,
    raw: &str,
) -> Result<JsValue, JsValue> {
    let mut library = load(library_json)?;
    let id = new_document_id();
    let document = library.add_transcript(&id, file_name, raw);
    wasm_info!(
        "libraryAddTranscript: '{}' with {} marks as {}",
        document.name,
        document.marks.len(),
        id
    );
    update(&library, id)
}

/// Store the open document back under its id
#[wasm_bindgen(js_name = librarySave)]
pub fn library_save(
    library_json: Option<String>,
    id: &str,
    document_js: JsValue,
) -> Result<String, JsValue> {
    let mut library = load(library_json)?;
    let document: Document = deserialize(document_js, "Invalid document")?;
    library.insert(id, document);
    store(&library)
}

#[wasm_bindgen(js_name = libraryRemove)]
pub fn library_remove(library_json: Option<String>, id: &str) -> Result<String, JsValue> {
    let mut library = load(library_json)?;
    let removed = library.remove(id).map_err(scansion_error)?;
    wasm_info!("libraryRemove: '{}' ({})", removed.name, id);
    store(&library)
}

#[wasm_bindgen(js_name = libraryGet)]
pub fn library_get(library_json: Option<String>, id: &str) -> Result<JsValue, JsValue> {
    let library = load(library_json)?;
    let document = library.require(id).map_err(scansion_error)?;
    serialize(document, "Failed to serialize document")
}

/// `[{id, name}]`, most recent first
#[wasm_bindgen(js_name = libraryList)]
pub fn library_list(library_json: Option<String>) -> Result<JsValue, JsValue> {
    let library = load(library_json)?;
    let entries: Vec<LibraryEntry> = library
        .ids_most_recent_first()
        .into_iter()
        .filter_map(|id| {
            library.get(id).map(|document| LibraryEntry {
                id,
                name: &document.name,
            })
        })
        .collect();
    serialize(&entries, "Failed to serialize library list")
}

/// Id of the document to open on startup
#[wasm_bindgen(js_name = libraryInitialDocument)]
pub fn library_initial_document(
    library_json: Option<String>,
    last_viewed: Option<String>,
) -> Result<Option<String>, JsValue> {
    let library = load(library_json)?;
    Ok(library
        .initial_document(last_viewed.as_deref())
        .map(str::to_string))
}
