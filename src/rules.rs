//! Declarative commit-message heuristics.
//!
//! Each rule pairs a set of optional conditions with a fixed message.
//! Rules are evaluated in declaration order and the first full match
//! wins, so new heuristics are added as table entries, not code.

/// A condition-set mapped to a fixed commit message.
///
/// An empty slice or `None` means the condition is absent and holds
/// vacuously. A rule declaring no conditions at all always matches and
/// shadows every rule after it; keep such rules last if at all.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Substrings that must all appear in the file-status text.
    pub files_contain: &'static [&'static str],
    /// Status letter that must appear in the file-status text.
    pub file_status: Option<char>,
    /// Keywords that must all appear in the diff, case-insensitively.
    pub diff_contains: &'static [&'static str],
    /// Substring that must appear in the file-status text.
    pub files_pattern: Option<&'static str>,
    /// Message used when every declared condition holds.
    pub message: &'static str,
}

impl Rule {
    fn matches(&self, status_text: &str, diff: &str) -> bool {
        if !self.files_contain.iter().all(|s| status_text.contains(s)) {
            return false;
        }

        if let Some(status) = self.file_status {
            if !status_text.contains(status) {
                return false;
            }
        }

        if !self.diff_contains.is_empty() {
            let diff_lower = diff.to_lowercase();
            if !self
                .diff_contains
                .iter()
                .all(|kw| diff_lower.contains(&kw.to_lowercase()))
            {
                return false;
            }
        }

        if let Some(pattern) = self.files_pattern {
            if !status_text.contains(pattern) {
                return false;
            }
        }

        true
    }
}

/// Built-in heuristics, highest priority first.
pub static RULES: &[Rule] = &[
    Rule {
        files_contain: &["cli/database_viewer.py"],
        file_status: Some('A'),
        diff_contains: &[],
        files_pattern: None,
        message: "Complete CLI modularization with database viewer and claim functions",
    },
    Rule {
        files_contain: &[],
        file_status: None,
        diff_contains: &["modularization"],
        files_pattern: None,
        message: "Complete modularization and fix import issues",
    },
    Rule {
        files_contain: &[],
        file_status: None,
        diff_contains: &[],
        files_pattern: Some("cli/"),
        message: "Complete modularization and fix import issues",
    },
];

/// Return the message of the first rule whose declared conditions all hold.
pub fn first_match<'r>(rules: &'r [Rule], status_text: &str, diff: &str) -> Option<&'r str> {
    rules
        .iter()
        .find(|rule| rule.matches(status_text, diff))
        .map(|rule| rule.message)
}
