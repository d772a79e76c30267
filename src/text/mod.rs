//! Text addressing and the mark layer
//!
//! Pure bookkeeping with no knowledge of meters.
//!
//! - `cursor`: syllable references and the flattened global cursor
//! - `annotations`: sparse marks stored apart from the text

pub mod annotations;
pub mod cursor;

pub use annotations::MarkLayer;
pub use cursor::{from_global, to_global, total_positions, SyllableRef};
