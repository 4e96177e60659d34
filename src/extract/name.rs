//! Candidate name.

use super::Patterns;

/// First line made of exactly two capitalized words.
pub fn extract_name(patterns: &Patterns, text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| patterns.name.is_match(line))
        .map(str::to_string)
}
