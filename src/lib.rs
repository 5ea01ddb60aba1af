//! basebounties: a simulated crypto-bounty board for GitHub issues.
//!
//! Maintainers fund issues with USDC rewards, workers claim and resolve them,
//! and escrow is simulated entirely in memory for the life of the process.
//! The lifecycle controller ([`app::board::BountyBoard`]) owns all shared
//! state; the analysis collaborator and the wallet provider are injectable
//! ports so the whole flow runs deterministically under test.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{AppBoard, analyze_issue_text, build_analyzer, open_board, seed_board};
pub use app::board::BountyBoard;
pub use domain::{
    AppError, Bounty, BountyDraft, BountyStatus, Difficulty, IssueAnalysis, View, WalletSession,
};
