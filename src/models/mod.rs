//! Models module for the scansion editor
//!
//! Marks, meters and documents, plus the session and library that own them.

pub mod commands;
pub mod core;
pub mod library;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use commands::{EditCommand, EditOutcome};
pub use self::core::*;
pub use library::Library;
pub use session::ScansionSession;
