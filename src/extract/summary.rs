//! Summary or objective statement.
//!
//! Two triggers share one forward pass over the lines:
//!
//! - an explicit heading ("Professional Summary", "Objective", ...) starts
//!   a capture that joins the following non-empty lines until an all-caps
//!   heading (excluded) or a line ending in a period (included);
//! - before any such heading, the first letters-only line is taken as the
//!   name and the next non-blank line becomes the summary on its own.
//!
//! Whichever trigger fires first ends the search.

use super::Patterns;

#[derive(Clone, Copy)]
enum State {
    /// Looking for a trigger; `after_name` once a name-shaped line was seen.
    Scanning { after_name: bool },
    /// Joining lines after an explicit heading.
    Capturing,
}

/// Extract the summary, or `None` when nothing was captured.
pub fn extract_summary(patterns: &Patterns, text: &str) -> Option<String> {
    let mut state = State::Scanning { after_name: false };
    let mut captured: Vec<&str> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();

        if patterns.summary_title.is_match(line) {
            state = State::Capturing;
            continue;
        }

        match state {
            State::Capturing => {
                if patterns.is_heading(line) {
                    break;
                }
                if !line.is_empty() {
                    captured.push(line);
                    if line.ends_with('.') {
                        break;
                    }
                }
            }
            State::Scanning { after_name: false } => {
                if !line.is_empty() && patterns.name_shaped.is_match(line) {
                    state = State::Scanning { after_name: true };
                }
            }
            State::Scanning { after_name: true } => {
                if !line.is_empty() {
                    log::trace!("Summary taken from the line after the name");
                    captured.push(line);
                    break;
                }
            }
        }
    }

    let summary = captured.join(" ");
    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
