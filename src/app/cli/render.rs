//! Plain-text rendering of board state.

use crate::app::api::AppBoard;
use crate::domain::{Bounty, WalletSession};

pub(super) fn home(board: &AppBoard, query: &str) {
    println!("⚡ BaseBounties — fund GitHub issues with USDC, release on completion");
    match board.session().short_address() {
        Some(address) => {
            println!("Wallet: {} ({} USDC)", address, board.session().balance_usdc)
        }
        None => println!("Wallet: not connected"),
    }
    println!(
        "Total Value Locked: ${} USDC · Open bounties: {}",
        board.total_escrowed_usdc(),
        board.open_count()
    );
    if !query.is_empty() {
        println!("Filter: \"{query}\"");
    }

    let filtered = board.filter_bounties(query);
    if filtered.is_empty() {
        println!("\nNo bounties found matching your search.");
    } else {
        println!();
        for bounty in &filtered {
            println!("  {}", card(bounty));
        }
    }
}

/// One-line listing entry, e.g. `#3 [OPEN] Fix login bug — 300 USDC (bug, auth)`.
pub(super) fn card(bounty: &Bounty) -> String {
    format!(
        "#{} [{}] {} — {} USDC ({})",
        bounty.id,
        bounty.status,
        bounty.title,
        bounty.amount_usdc,
        bounty.tags.join(", ")
    )
}

pub(super) fn detail(bounty: &Bounty, session: &WalletSession) {
    println!();
    println!("{} · created {}", bounty.status.label(), bounty.created_at.format("%Y-%m-%d"));
    println!("{}", bounty.title);
    if !bounty.tags.is_empty() {
        println!("Tags: {}", bounty.tags.join(", "));
    }
    if !bounty.description.trim().is_empty() {
        println!("\n{}", bounty.description.trim());
    }
    println!();
    println!("Original issue: {}", bounty.github_issue_url);
    println!("Total bounty: {} USDC — funds held in escrow", bounty.amount_usdc);
    println!("Maintainer: {}", bounty.maintainer_address);
    if let Some(worker) = &bounty.worker_address {
        println!("Worker: {}", worker);
    }
    if !session.is_connected() {
        println!("\nConnect your wallet to claim or manage this bounty.");
    }
}
