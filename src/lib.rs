//! ai-commit: propose a commit message for the currently staged changes.
//!
//! The message comes from a local text-generation service when one is
//! reachable; otherwise a deterministic heuristic builds one from the
//! staged file statuses. The binary wraps this in an interactive
//! accept/edit/show-diff/cancel flow ending in `git commit` + `git push`.

pub mod cli_args;
pub mod config;
pub mod fallback;
pub mod git;
pub mod llm;
pub mod logging;
pub mod message;
pub mod rules;
