//! Message selection: generation service first, heuristics otherwise.

use crate::fallback;
use crate::llm::{Generation, RemoteGenerator};

/// Pick the commit message for a staged change set.
///
/// The generation service is tried first when a client is supplied;
/// any degraded outcome (or an empty message) is logged and the
/// deterministic fallback takes over, so the result is always
/// non-empty.
pub fn select_message(
    remote: Option<&dyn RemoteGenerator>,
    status_text: &str,
    diff: &str,
) -> String {
    if let Some(client) = remote {
        match client.generate(diff) {
            Generation::Message(message) if !message.trim().is_empty() => return message,
            Generation::Message(_) => {
                log::warn!("generation service returned an empty message; using fallback");
            }
            Generation::Degraded(reason) => {
                log::warn!("generation service unavailable ({reason}); using fallback");
            }
        }
    }

    fallback::simple_message(status_text, diff)
}
