//! Rendering module for turning documents and reports into output text.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{ensure_trailing_newline, normalize_line_endings};
