//! Utility modules for the scansion editor

pub mod columns;

pub use columns::{filler_for, is_combining, visual_column};
