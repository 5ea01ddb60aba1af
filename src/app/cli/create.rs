//! Creation form flow.

use crate::app::api::AppBoard;
use crate::app::cli::{amount_input, confirm, text_input};
use crate::domain::{AppError, BountyDraft, IssueAnalysis};

/// Walk the user through the creation form.
///
/// Any cancelled prompt abandons the draft and returns to the home view. The
/// analysis step is offered only for non-empty descriptions and runs at most
/// once per pass through the form.
pub(super) fn run_form(board: &mut AppBoard) -> Result<(), AppError> {
    println!("\n— Create New Bounty —");

    let Some(github_issue_url) =
        text_input("GitHub issue URL", Some("https://github.com/"), true)?
    else {
        return cancel(board);
    };
    let Some(description) = text_input("Issue description", None, true)? else {
        return cancel(board);
    };

    let mut suggestion: Option<IssueAnalysis> = None;
    if !description.trim().is_empty()
        && confirm("Generate title & price with AI?", true)? == Some(true)
    {
        println!("✨ Analyzing issue...");
        suggestion = board.suggest_bounty_details(&description);
        if let Some(s) = &suggestion {
            println!(
                "   Suggested: {} — {} USDC ({}) [{}]",
                s.title,
                s.suggested_price,
                s.difficulty,
                s.tags.join(", ")
            );
        }
    }

    let initial_title = suggestion.as_ref().map(|s| s.title.clone());
    let Some(title) = text_input("Bounty title", initial_title.as_deref(), true)? else {
        return cancel(board);
    };

    let initial_amount = suggestion.as_ref().map(|s| s.suggested_price);
    let Some(amount_usdc) = amount_input("Bounty amount (USDC)", initial_amount)? else {
        return cancel(board);
    };

    let initial_tags = suggestion.map(|s| s.tags.join(", "));
    let Some(tags_raw) = text_input("Tags (comma separated)", initial_tags.as_deref(), true)?
    else {
        return cancel(board);
    };
    let tags: Vec<String> = tags_raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if confirm("Deposit & create bounty?", true)? != Some(true) {
        return cancel(board);
    }

    let bounty = board.create_bounty(BountyDraft {
        github_issue_url,
        title,
        description,
        amount_usdc,
        tags,
    });
    println!(
        "✅ Created bounty #{}: {} ({} USDC deposited to escrow)",
        bounty.id, bounty.title, bounty.amount_usdc
    );
    Ok(())
}

fn cancel(board: &mut AppBoard) -> Result<(), AppError> {
    board.return_home();
    Ok(())
}
