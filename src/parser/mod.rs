//! Page token parsing module.

mod options;
mod token;

pub use options::ParseOptions;
pub use token::{extract_token, Extraction, PageToken};
