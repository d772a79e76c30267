//! Editing commands issued against a scansion session
//!
//! Each keyboard action maps to one command; the session applies it and
//! reports whether the document's marks changed.

use serde::{Deserialize, Serialize};

use super::core::Mark;

/// A user-level editing command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditCommand {
    /// Assign a mark at the cursor, then advance
    SetMark(Mark),
    /// Clear the mark at the cursor, then advance (Tab, Space)
    ClearAndAdvance,
    /// Clear the mark at the cursor, then move back (Backspace)
    ClearAndRetreat,
    /// Clear the mark at the cursor without moving (Delete)
    ClearInPlace,
    MoveLeft,
    MoveRight,
}

impl EditCommand {
    /// Map a DOM `KeyboardEvent.key` value to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Tab" | " " => Some(EditCommand::ClearAndAdvance),
            "Backspace" => Some(EditCommand::ClearAndRetreat),
            "Delete" => Some(EditCommand::ClearInPlace),
            "ArrowLeft" => Some(EditCommand::MoveLeft),
            "ArrowRight" => Some(EditCommand::MoveRight),
            _ => Mark::from_key(key).map(EditCommand::SetMark),
        }
    }
}

/// Result of applying a command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    /// True when the marks were modified and the document must be persisted
    pub marks_changed: bool,
    /// Global cursor after the command
    pub cursor: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(EditCommand::from_key("Tab"), Some(EditCommand::ClearAndAdvance));
        assert_eq!(EditCommand::from_key(" "), Some(EditCommand::ClearAndAdvance));
        assert_eq!(EditCommand::from_key("Backspace"), Some(EditCommand::ClearAndRetreat));
        assert_eq!(EditCommand::from_key("Delete"), Some(EditCommand::ClearInPlace));
        assert_eq!(EditCommand::from_key("ArrowLeft"), Some(EditCommand::MoveLeft));
        assert_eq!(EditCommand::from_key("ArrowRight"), Some(EditCommand::MoveRight));
        assert_eq!(EditCommand::from_key("u"), Some(EditCommand::SetMark(Mark::Short)));
        assert_eq!(EditCommand::from_key("ArrowUp"), None);
        assert_eq!(EditCommand::from_key("e"), None);
    }
}
