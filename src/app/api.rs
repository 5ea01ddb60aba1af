//! Composition facade: wires adapters to the board.

use std::path::Path;

use crate::adapters::{
    HttpGeminiClient, OfflineAnalyzer, RetryPolicy, RetryingAnalyzer, SimulatedWalletProvider,
    load_seed_bounties,
};
use crate::app::board::BountyBoard;
use crate::app::config::load_analysis_config;
use crate::domain::{AnalysisApiConfig, AppError, BountyDraft, IssueAnalysis};
use crate::ports::IssueAnalyzer;

/// Board wired with the production adapters.
pub type AppBoard = BountyBoard<Box<dyn IssueAnalyzer>, SimulatedWalletProvider>;

/// Build the analyzer chain for the current environment.
///
/// With `GEMINI_API_KEY` set: HTTP Gemini client wrapped in retries. Without
/// it: the offline analyzer, so the creation flow degrades instead of failing.
pub fn build_analyzer(config: &AnalysisApiConfig) -> Result<Box<dyn IssueAnalyzer>, AppError> {
    match HttpGeminiClient::from_env_with_config(config) {
        Ok(client) => Ok(Box::new(RetryingAnalyzer::new(
            Box::new(client),
            RetryPolicy::from_config(config),
        ))),
        Err(AppError::EnvironmentVariableMissing(_)) => Ok(Box::new(OfflineAnalyzer)),
        Err(e) => Err(e),
    }
}

/// Assemble a board for the current directory's configuration.
pub fn open_board(wallet: SimulatedWalletProvider) -> Result<AppBoard, AppError> {
    let config = load_analysis_config(Path::new("."))?;
    let analyzer = build_analyzer(&config)?;
    Ok(BountyBoard::new(analyzer, wallet))
}

/// Install the embedded seed catalog; returns how many bounties were added.
pub fn seed_board(board: &mut AppBoard) -> Result<usize, AppError> {
    let seeds = load_seed_bounties()?;
    let count = seeds.len();
    for seed in seeds {
        let draft = BountyDraft {
            github_issue_url: seed.github_issue_url,
            title: seed.title,
            description: seed.description,
            amount_usdc: seed.amount_usdc,
            tags: seed.tags,
        };
        board.install_seed(draft, &seed.maintainer_address);
    }
    Ok(count)
}

/// Run the analysis collaborator directly against free-text issue content.
///
/// Empty content is rejected before the collaborator is invoked; a failing
/// collaborator degrades to the failure fallback record.
pub fn analyze_issue_text(issue_content: &str) -> Result<IssueAnalysis, AppError> {
    let content = issue_content.trim();
    if content.is_empty() {
        return Err(AppError::EmptyIssueContent);
    }

    let config = load_analysis_config(Path::new("."))?;
    let analyzer = build_analyzer(&config)?;
    Ok(analyzer
        .analyze_issue(content)
        .unwrap_or_else(|_| IssueAnalysis::analysis_failed()))
}
