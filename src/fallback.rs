//! Deterministic commit messages when the generation service is out.

use crate::rules::{self, RULES};

/// Build a commit message without the generation service.
///
/// The rule table runs first; otherwise the message comes from counts
/// of added, modified, and deleted files in the status text. Always
/// returns a non-empty string.
pub fn simple_message(status_text: &str, diff: &str) -> String {
    if let Some(message) = rules::first_match(RULES, status_text, diff) {
        return message.to_string();
    }

    let mut added = 0usize;
    let mut modified = 0usize;
    let mut deleted = 0usize;

    for line in status_text.lines() {
        match line.chars().next() {
            Some('A') => added += 1,
            Some('M') => modified += 1,
            Some('D') => deleted += 1,
            _ => {}
        }
    }

    let mut parts = Vec::new();
    if added > 0 {
        parts.push(clause("Add", added));
    }
    if modified > 0 {
        parts.push(clause("Update", modified));
    }
    if deleted > 0 {
        parts.push(clause("Delete", deleted));
    }

    if parts.is_empty() {
        return "Update files".to_string();
    }

    parts.join(" and ")
}

fn clause(verb: &str, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{verb} {count} file{plural}")
}
