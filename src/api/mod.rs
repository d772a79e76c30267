//! Scansion editor WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and console logging
//! - `editor`: the `ScansionEditor` class owning the open document's session
//! - `library`: stateless operations over the stored library JSON

pub mod helpers;
pub mod editor;
pub mod library;

pub use editor::ScansionEditor;
pub use library::*;
