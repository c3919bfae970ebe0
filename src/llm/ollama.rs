use std::time::Duration;

use musli::json;
use musli::{Decode, Encode};
use reqwest::blocking::Client;

use super::{prompts, Generation, RemoteGenerator};

/// Bounded wait for the generation service; a timeout degrades, it
/// never crashes the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Wire structs for /api/generate, encoded with musli::json. The
// response carries more fields (model, created_at, done, timings);
// only `response` matters here.
#[derive(Debug, Encode)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Decode)]
struct GenerateResponse {
    response: String,
}

/// Synchronous client for an Ollama-style /api/generate endpoint.
pub struct OllamaClient {
    http: Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            url: url.into(),
            model: model.into(),
        }
    }

    fn request(&self, diff: &str) -> Result<String, String> {
        let req_body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompts::build_prompt(diff),
            stream: false,
        };

        let body_str = json::to_string(&req_body)
            .map_err(|e| format!("failed to encode generation request: {e}"))?;

        log::trace!("generation request body: {body_str}");

        let resp = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| format!("error calling {url}: {e}", url = self.url))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| format!("failed to read response body: {e}"))?;

        if !status.is_success() {
            return Err(format!(
                "HTTP {status} from {url}: {body}",
                status = status.as_u16(),
                url = self.url,
                body = text.trim()
            ));
        }

        log::trace!("raw generation response: {text}");

        let parsed: GenerateResponse = json::from_str(&text)
            .map_err(|e| format!("failed to decode generation response: {e}"))?;

        Ok(sanitize(&parsed.response))
    }
}

impl RemoteGenerator for OllamaClient {
    fn generate(&self, diff: &str) -> Generation {
        match self.request(diff) {
            Ok(message) if !message.is_empty() => Generation::Message(message),
            Ok(_) => Generation::Degraded("service returned an empty message".to_string()),
            Err(reason) => Generation::Degraded(reason),
        }
    }
}

/// Strip surrounding whitespace, one layer of quote characters, and a
/// leading "Commit message:" label the model sometimes echoes back.
fn sanitize(raw: &str) -> String {
    let message = raw.trim().trim_matches('"').trim_matches('\'').trim();
    let message = match message.strip_prefix("Commit message:") {
        Some(rest) => rest.trim(),
        None => message,
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_double_quotes() {
        assert_eq!(sanitize("\"Fix bug\""), "Fix bug");
    }

    #[test]
    fn strips_single_quotes_and_whitespace() {
        assert_eq!(sanitize("  'Add login form'\n"), "Add login form");
    }

    #[test]
    fn strips_echoed_label() {
        assert_eq!(sanitize("Commit message: Add login"), "Add login");
        assert_eq!(sanitize("\"Commit message:  Fix typo\""), "Fix typo");
    }

    #[test]
    fn plain_message_passes_through() {
        assert_eq!(sanitize("Refactor parser"), "Refactor parser");
    }

    #[test]
    fn whitespace_only_sanitizes_to_empty() {
        assert_eq!(sanitize("  \"\"  "), "");
    }
}
