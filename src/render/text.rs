//! Plain text rendering helpers.

/// Append a newline unless the text already ends with one.
///
/// An empty text counts as a single empty line and is returned as is.
pub fn ensure_trailing_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

/// Normalize Windows line endings so that a document splits cleanly on `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
