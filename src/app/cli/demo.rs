//! Scripted walkthrough of the bounty lifecycle.

use crate::adapters::{OfflineAnalyzer, SimulatedWalletProvider};
use crate::app::api::{self, AppBoard};
use crate::app::board::BountyBoard;
use crate::app::cli::render;
use crate::domain::{AppError, BountyDraft};
use crate::ports::IssueAnalyzer;

const DEMO_ISSUE: &str = "Session cookies are not invalidated on logout, so a \
stolen cookie keeps working until it expires. Add server-side revocation.";

/// Non-interactive end-to-end run: seed, connect, create, claim, release.
///
/// Uses the offline analyzer and an instant wallet so the run is deterministic
/// and needs no network or credentials.
pub(super) fn run() -> Result<(), AppError> {
    println!("BaseBounties demo — simulated escrow walkthrough\n");

    let analyzer: Box<dyn IssueAnalyzer> = Box::new(OfflineAnalyzer);
    let mut board: AppBoard = BountyBoard::new(analyzer, SimulatedWalletProvider::instant());

    let seeded = api::seed_board(&mut board)?;
    println!("Seeded {} bounties from the starter catalog:", seeded);
    print_listing(&board);

    println!("\n→ Connecting wallet...");
    let session = board.connect_wallet();
    println!(
        "✅ Wallet connected: {} ({} USDC)",
        session.short_address().unwrap_or_default(),
        session.balance_usdc
    );

    println!("\n→ Analyzing issue text with the AI helper...");
    let suggestion = board
        .suggest_bounty_details(DEMO_ISSUE)
        .expect("demo issue content is non-empty");
    println!(
        "   Suggested: {} — {} USDC ({}) [{}]",
        suggestion.title,
        suggestion.suggested_price,
        suggestion.difficulty,
        suggestion.tags.join(", ")
    );

    let draft = BountyDraft {
        github_issue_url: "https://github.com/basebounties/dashboard/issues/97".to_string(),
        title: suggestion.title,
        description: DEMO_ISSUE.to_string(),
        amount_usdc: suggestion.suggested_price,
        tags: suggestion.tags,
    };
    let (id, title) = {
        let bounty = board.create_bounty(draft);
        (bounty.id, bounty.title.clone())
    };
    println!("✅ Created bounty #{}: {} (funds deposited to escrow)", id, title);

    board.claim_bounty(id)?;
    println!(
        "✅ Bounty #{} claimed by {} — status IN_PROGRESS",
        id,
        board.session().short_address().unwrap_or_default()
    );

    board.release_bounty(id)?;
    println!("✅ Funds released to worker — bounty #{} COMPLETED", id);

    println!("\nFinal board:");
    print_listing(&board);
    println!(
        "\nTotal Value Locked: ${} USDC · Open bounties: {}",
        board.total_escrowed_usdc(),
        board.open_count()
    );
    Ok(())
}

fn print_listing(board: &AppBoard) {
    for bounty in board.bounties() {
        println!("  {}", render::card(bounty));
    }
}
