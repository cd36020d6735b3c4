//! # folio
//!
//! Re-derive consistent page numbers in plain-text transcripts.
//!
//! OCR'd books often end each line (or each page) with the page number it
//! was found on. This library splits those trailing numbers off, shifts them
//! according to explicit `before -> after` directives, and flags places where
//! the result stops increasing.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{renumber_text, AlwaysContinue};
//!
//! let text = "Chapter one 1\nmore text 2->10\nthe end 3";
//! let renumbered = renumber_text(text, &mut AlwaysContinue)?;
//! assert_eq!(renumbered, "Chapter one 1\nmore text 10\nthe end 11");
//! # Ok::<(), folio::Error>(())
//! ```
//!
//! ## Line grammar
//!
//! Only the end of a line is inspected, and the first match wins:
//!
//! - `-?N -> M`: renumber directive, the line becomes page `M` and every
//!   following arabic page is shifted by `M - N`
//! - `N`: arabic page number
//! - `xi`, `XIV`, ...: roman page number (kept as is, never renumbered)

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod renumber;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{PageOrder, PagedTextLine, PagedTextLineSequence, TextLine};
pub use parser::{extract_token, PageToken, ParseOptions};
pub use render::{ensure_trailing_newline, to_json, JsonFormat};
pub use renumber::{AlwaysAbort, AlwaysContinue, Confirm, RenumberOptions, Renumberer};
pub use report::{missing_pages, MissingPage, RenumberSummary};

/// Parse a document into paged lines.
///
/// # Example
///
/// ```
/// let lines = folio::parse("intro xi\nbody 12").unwrap();
/// assert_eq!(lines[0].roman_page_number(), Some("xi"));
/// assert_eq!(lines[1].page_number(), Some(12));
/// ```
pub fn parse(text: &str) -> Result<PagedTextLineSequence> {
    PagedTextLineSequence::parse(text)
}

/// Renumber a document and render it back to text.
///
/// Returns [`Error::Cancelled`] when `confirm` declines; the input is then
/// left as it was.
pub fn renumber_text<C>(text: &str, confirm: &mut C) -> Result<String>
where
    C: Confirm + ?Sized,
{
    Folio::new().renumber(text, confirm).map(|result| result.to_text())
}

/// Builder for parsing and renumbering documents.
///
/// # Example
///
/// ```
/// use folio::{AlwaysContinue, Folio};
///
/// let result = Folio::new()
///     .with_separator("\t")
///     .with_trailing_newline(true)
///     .renumber("a 1\nb 2->5\nc 3", &mut AlwaysContinue)?;
/// assert_eq!(result.to_text(), "a\t1\nb\t5\nc\t6\n");
/// # Ok::<(), folio::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Folio {
    parse_options: ParseOptions,
    renumber_options: RenumberOptions,
    trailing_newline: bool,
}

impl Folio {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator between content and page number.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_separator(separator);
        self
    }

    /// Collapse runs of spaces inside lines.
    pub fn with_space_normalization(mut self, normalize: bool) -> Self {
        self.parse_options = self.parse_options.with_space_normalization(normalize);
        self
    }

    /// Set the question asked when the page order is broken.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.renumber_options = self.renumber_options.with_prompt(prompt);
        self
    }

    /// Make sure the rendered output ends with a newline.
    pub fn with_trailing_newline(mut self, add: bool) -> Self {
        self.trailing_newline = add;
        self
    }

    /// Parse a document with the configured options.
    pub fn parse(&self, text: &str) -> Result<PagedTextLineSequence> {
        PagedTextLineSequence::parse_with_options(text, &self.parse_options)
    }

    /// Parse and renumber a document.
    pub fn renumber<C>(&self, text: &str, confirm: &mut C) -> Result<FolioResult>
    where
        C: Confirm + ?Sized,
    {
        let source = self.parse(text)?;
        let lines = Renumberer::with_options(&source, self.renumber_options.clone())
            .renumber(confirm)?;
        Ok(FolioResult {
            lines,
            trailing_newline: self.trailing_newline,
        })
    }

    /// Parse a document and report what renumbering would do.
    pub fn analyze(&self, text: &str) -> Result<RenumberSummary> {
        let source = self.parse(text)?;
        RenumberSummary::analyze(&Renumberer::with_options(
            &source,
            self.renumber_options.clone(),
        ))
    }
}

/// Result of renumbering a document.
#[derive(Debug, Clone)]
pub struct FolioResult {
    /// The renumbered lines
    pub lines: PagedTextLineSequence,
    trailing_newline: bool,
}

impl FolioResult {
    /// Render the renumbered document.
    pub fn to_text(&self) -> String {
        let text = self.lines.to_text();
        if self.trailing_newline {
            ensure_trailing_newline(&text)
        } else {
            text
        }
    }

    /// Lines left without an arabic page number.
    pub fn missing_pages(&self) -> Vec<MissingPage> {
        missing_pages(&self.lines)
    }
}
