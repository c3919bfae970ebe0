//! Prompt construction for the generation service.

/// Longest diff prefix embedded in a prompt, in characters.
pub const DIFF_LIMIT: usize = 2000;

/// Wrap a staged diff in the generation instructions. The diff is hard
/// truncated to [`DIFF_LIMIT`] characters; very large diffs add noise
/// without improving the message.
pub fn build_prompt(diff: &str) -> String {
    format!(
        "Analyze the following git diff and write a concise, professional commit \
         message that summarizes the changes. The message should be in imperative \
         mood and under 500 characters if possible.\n\n\
         Git diff:\n{diff}\n\n\
         Rules:\n\
         - Use imperative mood (e.g., \"Add feature\" not \"Added feature\")\n\
         - Be concise and specific\n\
         - Focus on the main purpose, not implementation details\n\
         - Only output the commit message, nothing else\n\n\
         Commit message:",
        diff = truncate_chars(diff, DIFF_LIMIT)
    )
}

/// Prefix of `text` holding at most `limit` characters, never splitting
/// a multi-byte character.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
