//! CLI adapter.

mod create;
mod demo;
mod explore;
mod render;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::adapters::load_seed_bounties;
use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "basebounties")]
#[command(version)]
#[command(
    about = "Simulated crypto-bounty board for GitHub issues",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the bounty board interactively
    #[clap(visible_alias = "e")]
    Explore,
    /// Run a scripted walkthrough of the bounty lifecycle
    #[clap(visible_alias = "d")]
    Demo,
    /// Analyze issue text and print the suggested bounty details as JSON
    #[clap(visible_alias = "a")]
    Analyze {
        /// Issue text to analyze
        text: Option<String>,
        /// Read the issue text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// List the embedded starter bounties
    Seeds,
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Explore => explore::run(),
        Commands::Demo => demo::run(),
        Commands::Analyze { text, file } => analyze(text, file),
        Commands::Seeds => seeds(),
    }
}

fn analyze(text: Option<String>, file: Option<PathBuf>) -> Result<(), AppError> {
    let content = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err(AppError::EmptyIssueContent),
    };

    let analysis = api::analyze_issue_text(&content)?;
    let json = serde_json::to_string_pretty(&analysis)
        .map_err(|e| AppError::AnalysisApi { message: e.to_string(), status: None })?;
    println!("{}", json);
    Ok(())
}

fn seeds() -> Result<(), AppError> {
    for seed in load_seed_bounties()? {
        println!(
            "• {} — {} USDC ({}) posted by {}",
            seed.title,
            seed.amount_usdc,
            seed.tags.join(", "),
            seed.maintainer_address
        );
    }
    Ok(())
}

// --- dialoguer helpers: Ctrl-C cancels instead of erroring ---

pub(super) fn text_input(
    prompt: &str,
    initial: Option<&str>,
    allow_empty: bool,
) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty);
    if let Some(text) = initial {
        input = input.with_initial_text(text);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidInput(format!("Failed to read input: {}", err))),
    }
}

pub(super) fn amount_input(prompt: &str, initial: Option<u64>) -> Result<Option<u64>, AppError> {
    let mut input = Input::<u64>::new().with_prompt(prompt);
    if let Some(amount) = initial {
        input = input.with_initial_text(amount.to_string());
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidInput(format!("Failed to read amount: {}", err))),
    }
}

pub(super) fn select(prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
    match Select::new().with_prompt(prompt).items(items).default(0).interact_opt() {
        Ok(choice) => Ok(choice),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidInput(format!("Failed to read selection: {}", err))),
    }
}

pub(super) fn confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    match Confirm::new().with_prompt(prompt).default(default).interact_opt() {
        Ok(choice) => Ok(choice),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidInput(format!("Failed to read confirmation: {}", err))),
    }
}
