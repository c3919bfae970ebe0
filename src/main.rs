use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;

use ai_commit::cli_args::Cli;
use ai_commit::config::Config;
use ai_commit::git::{self, StagedChanges};
use ai_commit::llm::ollama::OllamaClient;
use ai_commit::llm::RemoteGenerator;
use ai_commit::{logging, message};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let staged = git::staged_snapshot()?;
    if staged.is_empty() {
        println!("No staged changes. Use `git add` first.");
        return Ok(());
    }

    print_staged_files(&staged);

    let cfg = Config::from_sources(&cli);
    let remote = if cli.no_model {
        log::info!("generation service disabled; using heuristics only");
        None
    } else {
        log::debug!("generation service: {} (model {})", cfg.url, cfg.model);
        Some(OllamaClient::new(cfg.url, cfg.model))
    };

    let suggestion = generate_message(remote.as_ref(), &staged);
    if suggestion.trim().is_empty() {
        bail!("unable to generate a commit message");
    }

    println!();
    println!("Suggested commit message:");
    println!("  {}", suggestion.bold());

    if cli.yes {
        return commit_and_push(&suggestion);
    }

    // Re-presenting the menu after "show diff" is a loop on purpose; the
    // snapshot and suggestion are already in hand, nothing is recomputed.
    loop {
        println!();
        println!("Options:");
        println!("  (y) Use this message");
        println!("  (e) Edit the message");
        println!("  (s) Show diff");
        println!("  (n) Cancel");

        let choice = prompt_input("\nChoose an option: ")?.to_lowercase();
        match choice.as_str() {
            "y" => return commit_and_push(&suggestion),
            "e" => {
                println!("\nEdit the message (press Enter for default):");
                let edited = prompt_input(&format!("[{suggestion}]: "))?;
                let final_message = if edited.is_empty() {
                    suggestion.clone()
                } else {
                    edited
                };
                return commit_and_push(&final_message);
            }
            "s" => {
                println!("\nStaged diff:\n{}", staged.diff);
            }
            "n" => {
                println!("Commit cancelled");
                return Ok(());
            }
            _ => {
                println!("Invalid choice");
                return Ok(());
            }
        }
    }
}

/// List the staged files with a colored status marker.
fn print_staged_files(staged: &StagedChanges) {
    println!("Staged files:");
    for (status, path) in staged.entries() {
        println!("  {} {}", status.marker(), path);
    }
}

/// Run message selection, with a spinner while the service call is in
/// flight.
fn generate_message(remote: Option<&OllamaClient>, staged: &StagedChanges) -> String {
    let spinner = remote.map(|_| {
        let bar = ProgressBar::new_spinner();
        bar.set_message("Generating commit message...");
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    });

    let suggestion = message::select_message(
        remote.map(|client| client as &dyn RemoteGenerator),
        &staged.status_text,
        &staged.diff,
    );

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    suggestion
}

fn commit_and_push(final_message: &str) -> Result<()> {
    git::commit(final_message)?;
    println!("{}", "Commit created successfully".green());
    git::push()?;
    println!("{}", "Pushed to remote successfully".green());
    Ok(())
}

/// Ask the user a question and return a trimmed input line.
fn prompt_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
