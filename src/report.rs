//! Reports over renumbered documents.

use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::model::{PagedTextLine, PagedTextLineSequence};
use crate::renumber::Renumberer;

/// A line left without an arabic page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPage {
    /// Line number (1-indexed)
    pub line_number: usize,
    /// Rendered line
    pub text: String,
}

impl fmt::Display for MissingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03} | {}", self.line_number, self.text)
    }
}

/// Lines without an arabic page number, roman-numbered and blank ones included.
pub fn missing_pages(lines: &PagedTextLineSequence) -> Vec<MissingPage> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.page_number().is_none())
        .map(|(i, line)| MissingPage {
            line_number: i + 1,
            text: line.to_text(),
        })
        .collect()
}

/// A line whose renumbered page is lower than the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisturbingLine {
    /// Line number (1-indexed)
    pub line_number: usize,
    /// Page number after renumbering
    pub page_number: i64,
    /// Rendered line
    pub text: String,
}

impl DisturbingLine {
    fn from_line(line: &PagedTextLine) -> Option<Self> {
        Some(Self {
            line_number: line.index() + 1,
            page_number: line.page_number()?,
            text: line.to_text(),
        })
    }
}

/// What renumbering a document would do, without asking anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenumberSummary {
    /// Total number of lines
    pub line_count: usize,

    /// Lines with an arabic page number in the source
    pub arabic_count: usize,

    /// Lines with a roman page number
    pub roman_count: usize,

    /// Lines with a `before -> after` directive
    pub directive_count: usize,

    /// Lines without an arabic page number after renumbering
    pub missing: Vec<MissingPage>,

    /// Lines that break the page order after renumbering
    pub order_disturbing: Vec<DisturbingLine>,
}

impl RenumberSummary {
    /// Analyze the document held by `renumberer`.
    pub fn analyze(renumberer: &Renumberer<'_>) -> Result<Self> {
        let source = renumberer.lines();
        let updated = renumberer.rebuild(&renumberer.new_numbers())?;
        Ok(Self {
            line_count: source.len(),
            arabic_count: source.iter().filter(|l| l.page_number().is_some()).count(),
            roman_count: source
                .iter()
                .filter(|l| l.roman_page_number().is_some())
                .count(),
            directive_count: source.iter().filter(|l| l.page_order().is_some()).count(),
            missing: missing_pages(&updated),
            order_disturbing: renumberer
                .order_disturbing_lines(&updated)
                .into_iter()
                .filter_map(DisturbingLine::from_line)
                .collect(),
        })
    }

    /// Check if renumbering would need confirmation.
    pub fn needs_confirmation(&self) -> bool {
        !self.order_disturbing.is_empty()
    }
}
