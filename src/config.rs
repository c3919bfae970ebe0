use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";

/// Final resolved configuration for ai-commit.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub url: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--url`)
    ///   2. Env vars `AI_COMMIT_MODEL` / `AI_COMMIT_URL`
    ///   3. TOML `~/.config/ai-commit.toml`
    ///   4. Hardcoded defaults (mistral, localhost Ollama endpoint)
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("AI_COMMIT_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let url = cli
            .url
            .clone()
            .or_else(|| env::var("AI_COMMIT_URL").ok())
            .or(file_cfg.url)
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        Config { model, url }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    /// Generation service address to use when not provided via CLI or env.
    pub url: Option<String>,
}

/// Return `~/.config/ai-commit.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("ai-commit.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
