use anyhow::{anyhow, Context, Result};
use colored::{ColoredString, Colorize};
use std::process::Command as GitCommand;

/// Status letter of a staged file, from `git diff --cached --name-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Other,
}

impl FileStatus {
    pub fn from_char(c: char) -> Self {
        match c {
            'A' => FileStatus::Added,
            'M' => FileStatus::Modified,
            'D' => FileStatus::Deleted,
            _ => FileStatus::Other,
        }
    }

    /// Colored marker for the staged-file listing.
    pub fn marker(&self) -> ColoredString {
        match self {
            FileStatus::Added => "A".green(),
            FileStatus::Modified => "M".yellow(),
            FileStatus::Deleted => "D".red(),
            FileStatus::Other => "?".bright_black(),
        }
    }
}

/// Immutable snapshot of the staged changes, taken once per run.
///
/// `status_text` keeps the raw name-status output because the rule
/// heuristics match on it as text; `entries` is the parsed view.
#[derive(Debug, Clone)]
pub struct StagedChanges {
    pub diff: String,
    pub status_text: String,
}

impl StagedChanges {
    pub fn is_empty(&self) -> bool {
        self.diff.trim().is_empty()
    }

    /// Parsed (status, path) view of the name-status text.
    pub fn entries(&self) -> Vec<(FileStatus, &str)> {
        self.status_text
            .lines()
            .filter_map(|line| {
                let first = line.chars().next()?;
                let path = line[first.len_utf8()..].trim();
                if path.is_empty() {
                    return None;
                }
                Some((FileStatus::from_char(first), path))
            })
            .collect()
    }
}

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Run a git command with stdio passed through, for commands whose
/// output the user should see directly (commit, push).
fn git_passthrough(args: &[&str]) -> Result<()> {
    let status = GitCommand::new("git")
        .args(args)
        .status()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            status.code()
        ));
    }

    Ok(())
}

/// Take the staged snapshot: full diff plus name-status listing.
pub fn staged_snapshot() -> Result<StagedChanges> {
    let diff = git_output(&["diff", "--cached"])?.trim().to_string();
    let status_text = git_output(&["diff", "--cached", "--name-status"])?
        .trim()
        .to_string();
    Ok(StagedChanges { diff, status_text })
}

/// Create a commit with the given message.
pub fn commit(message: &str) -> Result<()> {
    log::info!("Creating commit");
    git_passthrough(&["commit", "-m", message])
}

/// Push the current branch to its remote.
pub fn push() -> Result<()> {
    log::info!("Pushing to remote");
    git_passthrough(&["push"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_status_letters() {
        assert_eq!(FileStatus::from_char('A'), FileStatus::Added);
        assert_eq!(FileStatus::from_char('M'), FileStatus::Modified);
        assert_eq!(FileStatus::from_char('D'), FileStatus::Deleted);
        assert_eq!(FileStatus::from_char('R'), FileStatus::Other);
    }

    #[test]
    fn parses_name_status_entries() {
        let staged = StagedChanges {
            diff: String::new(),
            status_text: "A\tsrc/new.rs\nM\tsrc/lib.rs\nD\told.txt".to_string(),
        };
        let entries = staged.entries();
        assert_eq!(
            entries,
            vec![
                (FileStatus::Added, "src/new.rs"),
                (FileStatus::Modified, "src/lib.rs"),
                (FileStatus::Deleted, "old.txt"),
            ]
        );
    }

    #[test]
    fn skips_blank_lines_in_status_text() {
        let staged = StagedChanges {
            diff: String::new(),
            status_text: "A\ta.txt\n\nM\tb.txt\n".to_string(),
        };
        assert_eq!(staged.entries().len(), 2);
    }

    #[test]
    fn empty_snapshot_means_nothing_staged() {
        let staged = StagedChanges {
            diff: "  \n".to_string(),
            status_text: String::new(),
        };
        assert!(staged.is_empty());
    }
}
