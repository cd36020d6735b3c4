//! Text line carrying a trailing page number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TextLine;
use crate::error::Result;
use crate::parser::{extract_token, PageToken};

/// Explicit renumber directive written as `before -> after` at the end of a line.
///
/// From this line on, pages are shifted by `after - before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOrder {
    /// Page number as found in the source (may be negative)
    pub before: i64,
    /// Page number it should become
    pub after: i64,
}

impl PageOrder {
    /// Offset this directive establishes for the following pages.
    pub fn slide(&self) -> i64 {
        self.after - self.before
    }
}

/// A line whose trailing page token has been split from its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedTextLine {
    /// Line with the page token stripped
    line: TextLine,

    /// Arabic page number
    page_number: Option<i64>,

    /// Roman page number, as written
    roman_page_number: Option<String>,

    /// Renumber directive
    page_order: Option<PageOrder>,
}

impl PagedTextLine {
    /// Parse a raw line with the default separator.
    pub fn from_text(index: usize, text: &str) -> Result<Self> {
        Ok(Self::from_line(TextLine::new(index, text)?))
    }

    /// Split the page token off an already validated line.
    pub fn from_line(line: TextLine) -> Self {
        let extraction = extract_token(line.text());
        let stripped = line.with_text(extraction.residual);
        match extraction.token {
            PageToken::Directive(order) => Self {
                line: stripped,
                page_number: None,
                roman_page_number: None,
                page_order: Some(order),
            },
            PageToken::Arabic(page) => Self {
                line: stripped,
                page_number: Some(page),
                roman_page_number: None,
                page_order: None,
            },
            PageToken::Roman(roman) => Self {
                line: stripped,
                page_number: None,
                roman_page_number: Some(roman),
                page_order: None,
            },
            PageToken::Unnumbered => Self::from_parts(stripped, None, None),
        }
    }

    /// Build a line from already resolved values.
    ///
    /// No extraction is run: `line` is taken as the stripped content and the
    /// given numbers are authoritative, even when they are `None`.
    pub fn from_parts(
        line: TextLine,
        page_number: Option<i64>,
        roman_page_number: Option<String>,
    ) -> Self {
        Self {
            line,
            page_number,
            roman_page_number,
            page_order: None,
        }
    }

    /// The stripped line.
    pub fn line(&self) -> &TextLine {
        &self.line
    }

    /// Position in the document.
    pub fn index(&self) -> usize {
        self.line.index()
    }

    /// Content without the page token.
    pub fn text(&self) -> &str {
        self.line.text()
    }

    /// Separator used on render.
    pub fn separator(&self) -> &str {
        self.line.separator()
    }

    /// Arabic page number.
    pub fn page_number(&self) -> Option<i64> {
        self.page_number
    }

    /// Roman page number.
    pub fn roman_page_number(&self) -> Option<&str> {
        self.roman_page_number.as_deref()
    }

    /// Renumber directive.
    pub fn page_order(&self) -> Option<PageOrder> {
        self.page_order
    }

    /// Check if a page number of either kind is set.
    pub fn has_page(&self) -> bool {
        self.page_number.is_some() || self.roman_page_number.is_some()
    }

    /// Check if the line is nothing but a page number.
    pub fn is_page_number_only(&self) -> bool {
        self.has_page() && self.line.is_empty()
    }

    /// Page number as written on render, arabic first.
    pub fn page_string(&self) -> Option<String> {
        match (self.page_number, &self.roman_page_number) {
            (Some(page), _) => Some(page.to_string()),
            (None, Some(roman)) => Some(roman.clone()),
            (None, None) => None,
        }
    }

    /// Render the line with its page number and own separator.
    pub fn to_text(&self) -> String {
        self.to_text_with(true, None)
    }

    /// Render the line.
    ///
    /// Returns the stripped content when `include_page_number` is false or no
    /// page number is set. Otherwise content and page are joined with
    /// `separator`, falling back to the line's own separator.
    pub fn to_text_with(&self, include_page_number: bool, separator: Option<&str>) -> String {
        match self.page_string() {
            Some(page) if include_page_number => {
                let separator = separator.unwrap_or_else(|| self.line.separator());
                format!("{}{}{}", self.line.text(), separator, page)
            }
            _ => self.line.text().to_string(),
        }
    }

    /// Collapse runs of spaces in the content, keeping page information.
    pub fn format_space(&self) -> Self {
        Self {
            line: self.line.format_space(),
            ..self.clone()
        }
    }

    /// Run extraction again on the current content.
    ///
    /// Useful after the content was edited. Unless `overwrite` is set, a line
    /// that already carries a page number is returned unchanged.
    pub fn reextract(&self, overwrite: bool) -> Self {
        if self.has_page() && !overwrite {
            return self.clone();
        }
        Self::from_line(self.line.clone())
    }
}

impl fmt::Display for PagedTextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> PagedTextLine {
        PagedTextLine::from_text(0, text).unwrap()
    }

    #[test]
    fn test_separates_arabic_pages() {
        let line = parse("text1 15");
        assert_eq!(line.text(), "text1");
        assert_eq!(line.page_number(), Some(15));
        assert_eq!(line.roman_page_number(), None);

        let line = parse("text2 203 204");
        assert_eq!(line.text(), "text2 203");
        assert_eq!(line.page_number(), Some(204));
    }

    #[test]
    fn test_separates_roman_pages() {
        let line = parse("text1 xi");
        assert_eq!(line.text(), "text1");
        assert_eq!(line.roman_page_number(), Some("xi"));
        assert_eq!(line.page_number(), None);

        let line = parse("text4v");
        assert_eq!(line.text(), "text4v");
        assert_eq!(line.roman_page_number(), None);
        assert_eq!(line.page_number(), None);
    }

    #[test]
    fn test_page_order() {
        let line = parse("text1 10  ->  5");
        assert_eq!(
            line.page_order(),
            Some(PageOrder {
                before: 10,
                after: 5
            })
        );
        assert_eq!(line.text(), "text1");
        assert_eq!(line.page_number(), None);
        assert_eq!(line.page_order().map(|o| o.slide()), Some(-5));

        for text in ["text1 1->", "text1 1->>2", "text1 1-->2"] {
            assert_eq!(parse(text).page_order(), None, "{:?}", text);
        }
    }

    #[test]
    fn test_text_without_page() {
        assert_eq!(parse("text1 1->5").text(), "text1");
        assert_eq!(parse("text1 1").text(), "text1");
    }

    #[test]
    fn test_rejects_line_breaks() {
        assert!(PagedTextLine::from_text(0, "text\n12").is_err());
    }

    #[test]
    fn test_to_text() {
        let line = parse("text1 15");
        assert_eq!(line.to_text(), "text1 15");
        assert_eq!(line.to_text_with(false, None), "text1");
        assert_eq!(line.to_text_with(true, Some(" | ")), "text1 | 15");

        let line = parse("preface xi");
        assert_eq!(line.to_text(), "preface xi");

        let line = parse("no number here");
        assert_eq!(line.to_text(), "no number here");
        assert_eq!(line.to_text_with(true, Some("---")), "no number here");
    }

    #[test]
    fn test_to_text_uses_own_separator() {
        let line = PagedTextLine::from_line(
            TextLine::new(0, "heading 4").unwrap().with_separator("\t"),
        );
        assert_eq!(line.separator(), "\t");
        assert_eq!(line.to_text(), "heading\t4");
    }

    #[test]
    fn test_page_number_only() {
        let line = parse("12");
        assert!(line.is_page_number_only());
        assert_eq!(line.text(), "");
        assert_eq!(line.to_text(), " 12");
        assert!(!parse("text 12").is_page_number_only());
        assert!(!parse("").is_page_number_only());
    }

    #[test]
    fn test_from_parts_skips_extraction() {
        let line = PagedTextLine::from_parts(TextLine::new(4, "text2 203").unwrap(), Some(204), None);
        assert_eq!(line.text(), "text2 203");
        assert_eq!(line.page_number(), Some(204));
        assert_eq!(line.page_order(), None);

        let line = PagedTextLine::from_parts(TextLine::new(4, "text2 203").unwrap(), None, None);
        assert_eq!(line.page_number(), None);
        assert!(!line.has_page());
    }

    #[test]
    fn test_page_string() {
        assert_eq!(parse("a 3").page_string(), Some("3".to_string()));
        assert_eq!(parse("a III").page_string(), Some("III".to_string()));
        assert_eq!(parse("a").page_string(), None);
    }

    #[test]
    fn test_format_space_keeps_page() {
        let line = parse("some   spaced   text 7").format_space();
        assert_eq!(line.text(), "some spaced text");
        assert_eq!(line.page_number(), Some(7));
    }

    #[test]
    fn test_reextract() {
        let line = PagedTextLine::from_parts(TextLine::new(0, "chapter 9").unwrap(), None, None);
        let updated = line.reextract(false);
        assert_eq!(updated.page_number(), Some(9));
        assert_eq!(updated.text(), "chapter");

        let line = PagedTextLine::from_parts(TextLine::new(0, "chapter 9").unwrap(), Some(30), None);
        assert_eq!(line.reextract(false).page_number(), Some(30));
        assert_eq!(line.reextract(true).page_number(), Some(9));
    }
}
