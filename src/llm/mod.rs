pub mod ollama;
pub mod prompts;

/// Outcome of asking the generation service for a message.
///
/// Every recoverable failure (network error, timeout, non-2xx status,
/// malformed payload, empty text) collapses into `Degraded` so the
/// caller falls back without distinguishing the cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Message(String),
    Degraded(String),
}

/// Seam for the generation service, so tests can substitute a stub.
pub trait RemoteGenerator {
    fn generate(&self, diff: &str) -> Generation;
}
