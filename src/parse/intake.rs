//! Text intake: cleaning uploaded and pasted text before it is stored

use crate::errors::ScansionError;
use crate::models::settings::PASTE_NAME_MAX_CHARS;

/// Replace `&nbsp;` entities and U+00A0 with plain spaces
pub fn normalize_spaces(text: &str) -> String {
    text.replace("&nbsp;", " ").replace('\u{00A0}', " ")
}

/// Clean uploaded text: normalize spaces and drop every blank line.
///
/// Tabs are preserved so marks can line up with the original layout.
pub fn clean_text(text: &str) -> String {
    normalize_spaces(text)
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Clean pasted text and derive a document name from its first line
pub fn prepare_paste(raw: &str) -> Result<(String, String), ScansionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScansionError::EmptyPaste);
    }

    let content = clean_text(trimmed);
    let first_line = content.split('\n').next().unwrap_or_default();
    Ok((paste_document_name(first_line), content))
}

/// `first 30 chars` + `...` when truncated + `.txt`
pub fn paste_document_name(first_line: &str) -> String {
    let head: String = first_line.chars().take(PASTE_NAME_MAX_CHARS).collect();
    let ellipsis = if first_line.chars().count() > PASTE_NAME_MAX_CHARS {
        "..."
    } else {
        ""
    };
    format!("{head}{ellipsis}.txt")
}
