//! Document library: every stored text keyed by id
//!
//! The browser persists the library as one JSON object (`id -> Document`).
//! Ids are millisecond timestamps written as decimal strings, so numeric
//! order is creation order.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::core::Document;
use crate::errors::ScansionError;
use crate::parse::{clean_text, prepare_paste};
use crate::transcript::import_transcript;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Library {
    texts: BTreeMap<String, Document>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted library
    pub fn from_json(json: &str) -> Result<Self, ScansionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load whatever storage holds; nothing stored means an empty library
    pub fn load(saved: Option<&str>) -> Result<Self, ScansionError> {
        match saved {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::new()),
        }
    }

    pub fn to_json(&self) -> Result<String, ScansionError> {
        Ok(serde_json::to_string(&self.texts)?)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.texts.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.texts.get(id)
    }

    /// Look up a document, failing on an unknown id
    pub fn require(&self, id: &str) -> Result<&Document, ScansionError> {
        self.texts
            .get(id)
            .ok_or_else(|| ScansionError::UnknownDocument(id.to_string()))
    }

    /// Store a document under `id`, replacing any previous one
    pub fn insert(&mut self, id: impl Into<String>, document: Document) -> Option<Document> {
        self.texts.insert(id.into(), document)
    }

    pub fn remove(&mut self, id: &str) -> Result<Document, ScansionError> {
        self.texts
            .remove(id)
            .ok_or_else(|| ScansionError::UnknownDocument(id.to_string()))
    }

    /// Add an uploaded plain-text file
    pub fn add_upload(&mut self, id: &str, file_name: &str, raw: &str) -> &Document {
        let document = Document::new(file_name, clean_text(raw));
        self.store(id, document)
    }

    /// Add pasted text; its name comes from the first line
    pub fn add_paste(&mut self, id: &str, raw: &str) -> Result<&Document, ScansionError> {
        let (name, content) = prepare_paste(raw)?;
        Ok(self.store(id, Document::new(name, content)))
    }

    /// Add an uploaded transcript with its marks realigned
    pub fn add_transcript(&mut self, id: &str, file_name: &str, raw: &str) -> &Document {
        let document = import_transcript(file_name, raw);
        self.store(id, document)
    }

    /// Ids ordered most recent first.
    ///
    /// Non-numeric ids sort after every timestamp.
    pub fn ids_most_recent_first(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.texts.keys().map(String::as_str).collect();
        ids.sort_by_key(|id| (Reverse(id.parse::<u64>().ok()), Reverse(*id)));
        ids
    }

    /// The document to open on startup: the last viewed one if it still
    /// exists, otherwise the most recent
    pub fn initial_document(&self, last_viewed: Option<&str>) -> Option<&str> {
        if let Some(id) = last_viewed {
            if let Some((key, _)) = self.texts.get_key_value(id) {
                return Some(key.as_str());
            }
        }
        self.ids_most_recent_first().into_iter().next()
    }

    fn store(&mut self, id: &str, document: Document) -> &Document {
        log::debug!("Storing document {} as '{}'", id, document.name);
        self.texts.insert(id.to_string(), document);
        &self.texts[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mark, MeterKind};
    use crate::text::SyllableRef;

    #[test]
    fn test_ids_most_recent_first() {
        let mut library = Library::new();
        library.insert("900", Document::new("a.txt", "a"));
        library.insert("1700000000000", Document::new("b.txt", "b"));
        library.insert("1600000000000", Document::new("c.txt", "c"));

        // string order would put "900" last
        assert_eq!(
            library.ids_most_recent_first(),
            vec!["1700000000000", "1600000000000", "900"]
        );
    }

    #[test]
    fn test_initial_document() {
        let mut library = Library::new();
        assert_eq!(library.initial_document(None), None);

        library.insert("100", Document::new("a.txt", "a"));
        library.insert("200", Document::new("b.txt", "b"));

        assert_eq!(library.initial_document(Some("100")), Some("100"));
        assert_eq!(library.initial_document(Some("999")), Some("200"));
        assert_eq!(library.initial_document(None), Some("200"));
    }

    #[test]
    fn test_add_upload_cleans_text() {
        let mut library = Library::new();
        let doc = library.add_upload("1", "aeneid.txt", "arma\n\n virumque&nbsp;cano\n");
        assert_eq!(doc.name, "aeneid.txt");
        assert_eq!(doc.content, "arma\n virumque cano");
        assert_eq!(doc.meter, MeterKind::Other);
    }

    #[test]
    fn test_add_paste() {
        let mut library = Library::new();
        assert!(matches!(library.add_paste("1", "   "), Err(ScansionError::EmptyPaste)));
        assert!(library.is_empty());

        let doc = library.add_paste("2", "arma virumque\ncano").unwrap();
        assert_eq!(doc.name, "arma virumque.txt");
    }

    #[test]
    fn test_remove_unknown() {
        let mut library = Library::new();
        assert!(matches!(library.remove("42"), Err(ScansionError::UnknownDocument(_))));
        assert!(library.require("42").is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut library = Library::new();
        let mut doc = Document::new("a.txt", "arma");
        doc.marks.set(SyllableRef::new(0, 1), Mark::Short);
        doc.meter = MeterKind::Dactylic;
        library.insert("1", doc);

        let json = library.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"1":{"name":"a.txt","content":"arma","marks":{"0-1":"u"},"meter":"dactylic"}}"#
        );
        assert_eq!(Library::from_json(&json).unwrap(), library);
        assert!(Library::load(None).unwrap().is_empty());
        assert!(Library::load(Some("not json")).is_err());
    }
}
