//! Line model types.
//!
//! A document is a [`PagedTextLineSequence`] of [`PagedTextLine`]s, each
//! wrapping a [`TextLine`] whose trailing page token has been stripped.
//! All types are values: transformations return new instances.

mod line;
mod paged;
mod sequence;

pub use line::{TextLine, DEFAULT_SEPARATOR};
pub use paged::{PageOrder, PagedTextLine};
pub use sequence::PagedTextLineSequence;
