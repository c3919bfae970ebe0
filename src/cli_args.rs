use clap::{ArgAction, ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "ai-commit",
    version,
    about = "LLM-assisted commit message generator for staged changes"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Auto-accept the suggested message: commit and push without prompting
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Model name to request from the generation service (e.g. mistral, llama3)
    #[arg(long, env = "AI_COMMIT_MODEL")]
    pub model: Option<String>,

    /// HTTP address of the generation service
    #[arg(long, env = "AI_COMMIT_URL")]
    pub url: Option<String>,

    /// Skip the generation service; build the message from heuristics only
    #[arg(long)]
    pub no_model: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_auto_accept_and_model() {
        let cli = Cli::try_parse_from(["ai-commit", "-y", "--model", "llama3"]).unwrap();
        assert!(cli.yes);
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert!(!cli.no_model);
    }

    #[test]
    fn model_and_no_model_are_exclusive() {
        let err = Cli::try_parse_from(["ai-commit", "--model", "mistral", "--no-model"]);
        assert!(err.is_err());
    }

    #[test]
    fn verbosity_accumulates() {
        let cli = Cli::try_parse_from(["ai-commit", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
