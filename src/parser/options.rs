//! Parsing options and configuration.

/// Options for parsing a text document into paged lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Separator placed between content and page number when a line is rendered
    pub separator: String,

    /// Collapse runs of spaces inside each line after extraction
    pub normalize_spaces: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator used when re-attaching page numbers.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable or disable space normalization.
    pub fn with_space_normalization(mut self, normalize: bool) -> Self {
        self.normalize_spaces = normalize;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            normalize_spaces: false,
        }
    }
}
