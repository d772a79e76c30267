//! Scansion Editor WASM Module
//!
//! Core of a browser-based editor for marking the metrical scansion of Latin
//! and Ancient Greek verse. Text is split into syllable positions, marks are
//! stored apart from the text, checked against a meter, and exchanged as
//! plain-text transcripts.

pub mod api;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod text;
pub mod transcript;
pub mod utils;

// Re-export commonly used types
pub use errors::ScansionError;
pub use models::core::*;
pub use models::{EditCommand, EditOutcome, Library, ScansionSession};
pub use text::{MarkLayer, SyllableRef};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(models::settings::LOG_LEVEL).is_err() {
            wasm_warn!("Logger was already initialized");
        }
    }

    log::info!("Scansion Editor WASM module initialized");
}
