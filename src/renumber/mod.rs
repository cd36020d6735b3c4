//! Renumbering engine.
//!
//! Page numbers are re-derived left to right with a running offset, the
//! *slide*:
//!
//! - a directive line `before -> after` gets `after`, and the slide becomes
//!   `after - before` (replaced, not accumulated);
//! - a line with an arabic page number gets `page + slide`;
//! - any other line, including roman-numbered ones, ends up unnumbered.
//!
//! The rebuilt document is then scanned for page numbers that go down. If
//! there are any, a [`Confirm`] strategy decides whether to keep the result.
//! The input sequence is never modified.

mod confirm;
mod options;

pub use confirm::{AlwaysAbort, AlwaysContinue, Confirm};
pub use options::{RenumberOptions, DEFAULT_ORDER_FLOOR, DEFAULT_PROMPT};

use crate::error::{Error, Result};
use crate::model::{PagedTextLine, PagedTextLineSequence};

/// Renumbers the pages of one document.
#[derive(Debug, Clone)]
pub struct Renumberer<'a> {
    lines: &'a PagedTextLineSequence,
    options: RenumberOptions,
}

impl<'a> Renumberer<'a> {
    /// Create a renumberer with default options.
    pub fn new(lines: &'a PagedTextLineSequence) -> Self {
        Self::with_options(lines, RenumberOptions::default())
    }

    /// Create a renumberer with custom options.
    pub fn with_options(lines: &'a PagedTextLineSequence, options: RenumberOptions) -> Self {
        Self { lines, options }
    }

    /// The sequence being renumbered.
    pub fn lines(&self) -> &'a PagedTextLineSequence {
        self.lines
    }

    /// Compute the new page number of every line.
    pub fn new_numbers(&self) -> Vec<Option<i64>> {
        let mut slide = 0;
        self.lines
            .iter()
            .map(|line| {
                if let Some(order) = line.page_order() {
                    slide = order.slide();
                    Some(order.after)
                } else {
                    line.page_number().map(|page| page + slide)
                }
            })
            .collect()
    }

    /// Build a new sequence with arabic page numbers replaced by `numbers`.
    ///
    /// Content, roman numbers and separators are carried over unchanged.
    pub fn rebuild(&self, numbers: &[Option<i64>]) -> Result<PagedTextLineSequence> {
        if numbers.len() != self.lines.len() {
            return Err(Error::ShapeMismatch {
                expected: self.lines.len(),
                actual: numbers.len(),
            });
        }
        Ok(self
            .lines
            .iter()
            .zip(numbers)
            .map(|(line, number)| {
                PagedTextLine::from_parts(
                    line.line().clone(),
                    *number,
                    line.roman_page_number().map(str::to_string),
                )
            })
            .collect())
    }

    /// Lines whose page number is smaller than the previous numbered line.
    ///
    /// The reference value moves to every numbered line, flagged or not, so
    /// a run that keeps decreasing after a drop is flagged line by line while
    /// a run that stays at the lower level is flagged only once.
    pub fn order_disturbing_lines<'s>(
        &self,
        lines: &'s PagedTextLineSequence,
    ) -> Vec<&'s PagedTextLine> {
        let mut last = self.options.order_floor;
        let mut disturbing = Vec::new();
        for line in lines {
            if let Some(page) = line.page_number() {
                if page < last {
                    disturbing.push(line);
                }
                last = page;
            }
        }
        disturbing
    }

    /// Renumber the document.
    ///
    /// When the result has order-disturbing lines they are passed, rendered,
    /// to `confirm`. Declining yields [`Error::Cancelled`] and the caller
    /// should keep its original text.
    pub fn renumber<C>(&self, confirm: &mut C) -> Result<PagedTextLineSequence>
    where
        C: Confirm + ?Sized,
    {
        let numbers = self.new_numbers();
        let updated = self.rebuild(&numbers)?;

        let disturbing = self.order_disturbing_lines(&updated);
        log::debug!(
            "Renumbered {} lines ({} directives, {} order-disturbing)",
            updated.len(),
            self.lines.iter().filter(|l| l.page_order().is_some()).count(),
            disturbing.len()
        );

        if !disturbing.is_empty() {
            log::warn!(
                "{} lines break the page order, first at line {}",
                disturbing.len(),
                disturbing[0].index() + 1
            );
            let details = disturbing
                .iter()
                .map(|line| line.to_text())
                .collect::<Vec<_>>()
                .join("\n");
            if !confirm.confirm(&details, &self.options.prompt) {
                log::info!("Renumbering cancelled, no changes made");
                return Err(Error::Cancelled);
            }
        }

        Ok(updated)
    }
}
