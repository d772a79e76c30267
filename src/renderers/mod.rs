//! Renderers module for the scansion editor
//!
//! View models computed in Rust and handed to JavaScript for drawing.

pub mod marks_row;

pub use marks_row::{render_marks_line, render_marks_rows, MarkSpan, MarksDisplay, RenderMarksLine};
