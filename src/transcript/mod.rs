//! Transcript codec
//!
//! A transcript is UTF-8 text made of line pairs: a marks line followed by
//! its text line, pairs separated by one blank line. Long, short and
//! irregular marks are written as U+2012, U+222A and U+00D7; metron letters
//! are written as themselves.
//!
//! - `export`: marks + lines -> transcript text, and the download file name
//! - `import`: transcript text -> content + marks realigned by visual column

pub mod export;
pub mod import;

pub use export::{export_transcript, marks_line, transcript_file_name};
pub use import::{import_transcript, parse_transcript, realign_marks, ParsedTranscript};
