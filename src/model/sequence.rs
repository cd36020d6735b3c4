//! Ordered collection of paged lines.

use serde::Serialize;
use std::ops::Index;

use super::{PagedTextLine, TextLine};
use crate::error::Result;
use crate::parser::ParseOptions;

/// All lines of a document, in document order.
///
/// The length is fixed once parsed: a document is split on `\n`, so text
/// without a final newline and text with one differ by a trailing empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PagedTextLineSequence {
    lines: Vec<PagedTextLine>,
}

impl PagedTextLineSequence {
    /// Parse a document with default options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    /// Parse a document with custom options.
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        Self::from_lines_with_options(text.split('\n'), options)
    }

    /// Build a sequence from lines that are already split.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with_options(lines, &ParseOptions::default())
    }

    /// Build a sequence from split lines with custom options.
    pub fn from_lines_with_options<I, S>(lines: I, options: &ParseOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| -> Result<PagedTextLine> {
                let line = TextLine::new(index, text.as_ref())?.with_separator(&options.separator);
                let paged = PagedTextLine::from_line(line);
                Ok(if options.normalize_spaces {
                    paged.format_space()
                } else {
                    paged
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { lines })
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the sequence holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by position.
    pub fn get(&self, index: usize) -> Option<&PagedTextLine> {
        self.lines.get(index)
    }

    /// All lines as a slice.
    pub fn lines(&self) -> &[PagedTextLine] {
        &self.lines
    }

    /// Iterate over lines in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, PagedTextLine> {
        self.lines.iter()
    }

    /// Render every line with its page number, joined by newlines.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(PagedTextLine::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<usize> for PagedTextLineSequence {
    type Output = PagedTextLine;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a PagedTextLineSequence {
    type Item = &'a PagedTextLine;
    type IntoIter = std::slice::Iter<'a, PagedTextLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl FromIterator<PagedTextLine> for PagedTextLineSequence {
    fn from_iter<T: IntoIterator<Item = PagedTextLine>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_counts_trailing_empty_line() {
        let lines = PagedTextLineSequence::parse("a 1\nb 2\n").unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].text(), "");

        let lines = PagedTextLineSequence::parse("a 1\nb 2").unwrap();
        assert_eq!(lines.len(), 2);

        let lines = PagedTextLineSequence::parse("").unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_indices_follow_document_order() {
        let lines = PagedTextLineSequence::parse("x\ny\nz").unwrap();
        let indices: Vec<_> = lines.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_round_trip_without_tokens() {
        let text = "first line\n\n  indented line\nlast, no newline";
        let lines = PagedTextLineSequence::parse(text).unwrap();
        assert_eq!(lines.to_text(), text);

        let text = "ends with newline\n";
        assert_eq!(PagedTextLineSequence::parse(text).unwrap().to_text(), text);
    }

    #[test]
    fn test_round_trip_with_pages() {
        let text = "chapter one 1\nmore text 2\npreface xi";
        let lines = PagedTextLineSequence::parse(text).unwrap();
        assert_eq!(lines[0].page_number(), Some(1));
        assert_eq!(lines[2].roman_page_number(), Some("xi"));
        assert_eq!(lines.to_text(), text);
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        let err = PagedTextLineSequence::parse("a 1\r\nb 2").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_from_lines() {
        let lines = PagedTextLineSequence::from_lines(["1", "2->5", "", "4->10", "5"]).unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].page_number(), Some(1));
        assert!(lines[1].page_order().is_some());
        assert!(!lines[2].has_page());
    }

    #[test]
    fn test_parse_with_options() {
        let options = ParseOptions::new()
            .with_separator(" - ")
            .with_space_normalization(true);
        let lines = PagedTextLineSequence::parse_with_options("a   b 3\nc", &options).unwrap();
        assert_eq!(lines[0].text(), "a b");
        assert_eq!(lines.to_text(), "a b - 3\nc");
    }

    #[test]
    fn test_iteration() {
        let lines = PagedTextLineSequence::parse("a 1\nb 2").unwrap();
        let pages: Vec<_> = (&lines).into_iter().filter_map(|l| l.page_number()).collect();
        assert_eq!(pages, vec![1, 2]);
        assert!(lines.get(2).is_none());
    }
}
