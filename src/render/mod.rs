//! Rendering module for converting records to output formats.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;

/// Placeholder rendered for an absent field.
pub const NOT_FOUND: &str = "Not found";
