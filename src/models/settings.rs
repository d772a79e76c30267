//! Named constants shared by intake, export and the WASM entry point

/// Characters of a pasted text's first line used for its document name
pub const PASTE_NAME_MAX_CHARS: usize = 30;

/// Extension given to exported transcripts
pub const TRANSCRIPT_EXTENSION: &str = ".mtr.txt";

/// Extension of plain uploaded texts
pub const TEXT_EXTENSION: &str = ".txt";

/// Timestamp prefix of exported transcript file names
pub const TRANSCRIPT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Console log level installed at module start
pub const LOG_LEVEL: log::Level = log::Level::Debug;
