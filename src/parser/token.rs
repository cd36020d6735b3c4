//! Trailing page token extraction.
//!
//! A raw line is classified by the first pattern that matches at its end, in
//! this order:
//!
//! 1. order directive, `before -> after`
//! 2. arabic page number
//! 3. roman page number (lowercase or uppercase `i`, `x`, `v` only)
//!
//! The matched token is removed and the rest of the line is kept as the
//! residual text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::PageOrder;

/// `before -> after` directive; `before` may be negative.
static ORDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<before>-?[0-9]+)\s*->\s*(?P<after>[0-9]+)$").unwrap());

/// Arabic page number, optionally preceded by a single whitespace character.
static ARABIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s?(?P<page>[0-9]+)$").unwrap());

/// Roman page number at a word boundary, single case only.
static ROMAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(?P<roman>[ixv]+|[IXV]+)$").unwrap());

/// Classification of the trailing token of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageToken {
    /// Explicit renumber directive
    Directive(PageOrder),
    /// Arabic page number
    Arabic(i64),
    /// Roman page number, as written
    Roman(String),
    /// No recognized token
    Unnumbered,
}

impl PageToken {
    /// Check if the token carries a page number of either kind.
    pub fn is_page(&self) -> bool {
        matches!(self, PageToken::Arabic(_) | PageToken::Roman(_))
    }
}

/// Result of [`extract_token`]: the token and the text left after removing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Recognized token
    pub token: PageToken,
    /// Line content with the token stripped
    pub residual: &'a str,
}

/// Split the trailing page token off a line.
///
/// The leftmost match anchored at the end of the line wins, so for
/// `"text2 203 204"` the page is `204` and the residual is `"text2 203"`.
/// Digits are not required to be separated from the preceding word:
/// `"text40"` yields page `40` and residual `"text"`. Roman numerals, on the
/// other hand, must start at the beginning of the line or after whitespace.
///
/// When a token is stripped the residual is trimmed on both ends. A digit run
/// that does not fit in an `i64` is not treated as a token.
pub fn extract_token(text: &str) -> Extraction<'_> {
    if let Some(extraction) = extract_directive(text) {
        return extraction;
    }
    if let Some(extraction) = extract_arabic(text) {
        return extraction;
    }
    if let Some(extraction) = extract_roman(text) {
        return extraction;
    }
    Extraction {
        token: PageToken::Unnumbered,
        residual: text,
    }
}

fn extract_directive(text: &str) -> Option<Extraction<'_>> {
    let caps = ORDER_PATTERN.captures(text)?;
    let before = caps.name("before")?;
    let after = caps.name("after")?;
    let order = PageOrder {
        before: before.as_str().parse().ok()?,
        after: after.as_str().parse().ok()?,
    };
    Some(Extraction {
        token: PageToken::Directive(order),
        residual: text[..before.start()].trim(),
    })
}

fn extract_arabic(text: &str) -> Option<Extraction<'_>> {
    let caps = ARABIC_PATTERN.captures(text)?;
    let whole = caps.get(0)?;
    let page = caps.name("page")?.as_str().parse().ok()?;
    Some(Extraction {
        token: PageToken::Arabic(page),
        residual: text[..whole.start()].trim(),
    })
}

fn extract_roman(text: &str) -> Option<Extraction<'_>> {
    let caps = ROMAN_PATTERN.captures(text)?;
    let roman = caps.name("roman")?;
    Some(Extraction {
        token: PageToken::Roman(roman.as_str().to_string()),
        residual: text[..roman.start()].trim(),
    })
}
