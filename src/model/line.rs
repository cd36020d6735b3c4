//! Plain text line.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Default separator between content and a re-attached page number.
pub const DEFAULT_SEPARATOR: &str = " ";

/// A single line of text with its position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    /// Position in the document (0-indexed)
    index: usize,

    /// Content, never contains a line break
    text: String,

    /// Inserted between content and page number on render
    separator: String,
}

impl TextLine {
    /// Create a new line with the default separator.
    ///
    /// Fails with [`Error::Validation`] when `text` contains `\n` or `\r`.
    pub fn new(index: usize, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains(['\n', '\r']) {
            return Err(Error::Validation(text));
        }
        Ok(Self {
            index,
            text,
            separator: DEFAULT_SEPARATOR.to_string(),
        })
    }

    /// Replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Same index and separator, different content.
    ///
    /// Callers must pass text that came out of an already validated line.
    pub(crate) fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            index: self.index,
            text: text.into(),
            separator: self.separator.clone(),
        }
    }

    /// Position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Line content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Separator used on render.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Collapse runs of spaces into one and drop leading and trailing spaces.
    pub fn format_space(&self) -> Self {
        let text = self
            .text
            .split(' ')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.with_text(text)
    }
}

impl fmt::Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
