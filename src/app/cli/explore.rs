//! Interactive board explorer.

use crate::adapters::SimulatedWalletProvider;
use crate::app::api::{self, AppBoard};
use crate::app::cli::{create, render, select, text_input};
use crate::domain::{AppError, BountyStatus, View};

pub fn run() -> Result<(), AppError> {
    let mut board = api::open_board(SimulatedWalletProvider::new())?;
    let seeded = api::seed_board(&mut board)?;
    println!("Seeded {} starter bounties.", seeded);

    let mut query = String::new();
    loop {
        match board.view() {
            View::Home => {
                if !home(&mut board, &mut query)? {
                    return Ok(());
                }
            }
            View::Details => details(&mut board)?,
            View::Create => create::run_form(&mut board)?,
        }
    }
}

#[derive(Clone, Copy)]
enum HomeAction {
    ViewBounty,
    Search,
    ClearSearch,
    CreateBounty,
    ConnectWallet,
    Quit,
}

/// Render the home view and handle one action. Returns `false` to quit.
fn home(board: &mut AppBoard, query: &mut String) -> Result<bool, AppError> {
    println!();
    render::home(board, query);

    let mut actions = Vec::new();
    let mut labels = Vec::new();
    if !board.filter_bounties(query).is_empty() {
        actions.push(HomeAction::ViewBounty);
        labels.push("View a bounty".to_string());
    }
    actions.push(HomeAction::Search);
    labels.push("Search bounties by title or tag".to_string());
    if !query.is_empty() {
        actions.push(HomeAction::ClearSearch);
        labels.push("Clear filters".to_string());
    }
    actions.push(HomeAction::CreateBounty);
    labels.push("Create a new bounty".to_string());
    if !board.session().is_connected() {
        actions.push(HomeAction::ConnectWallet);
        labels.push("Connect wallet".to_string());
    }
    actions.push(HomeAction::Quit);
    labels.push("Quit".to_string());

    let Some(choice) = select("What next?", &labels)? else {
        return Ok(false);
    };

    match actions[choice] {
        HomeAction::ViewBounty => pick_bounty(board, query)?,
        HomeAction::Search => {
            if let Some(q) = text_input("Search", Some(query.as_str()), true)? {
                *query = q;
            }
        }
        HomeAction::ClearSearch => query.clear(),
        HomeAction::CreateBounty => board.open_create_form(),
        HomeAction::ConnectWallet => connect(board),
        HomeAction::Quit => return Ok(false),
    }
    Ok(true)
}

fn connect(board: &mut AppBoard) {
    println!("→ Requesting wallet connection...");
    let session = board.connect_wallet();
    println!(
        "✅ Wallet connected: {} ({} USDC)",
        session.short_address().unwrap_or_default(),
        session.balance_usdc
    );
}

fn pick_bounty(board: &mut AppBoard, query: &str) -> Result<(), AppError> {
    let (ids, labels): (Vec<u64>, Vec<String>) = board
        .filter_bounties(query)
        .iter()
        .map(|b| (b.id, render::card(b)))
        .unzip();

    if let Some(choice) = select("Open which bounty?", &labels)? {
        board.select_bounty(ids[choice])?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum DetailAction {
    Claim,
    Release,
    ConnectWallet,
    Back,
}

fn details(board: &mut AppBoard) -> Result<(), AppError> {
    let Some(bounty) = board.selected_bounty() else {
        board.return_home();
        return Ok(());
    };
    render::detail(bounty, board.session());

    // The menu only offers actions the board would accept; the board still
    // re-checks on invocation.
    let id = bounty.id;
    let status = bounty.status;
    let address = board.session().address.clone();
    let is_maintainer = address.as_deref().is_some_and(|a| bounty.is_maintainer(a));

    let mut actions = Vec::new();
    let mut labels = Vec::new();
    match address {
        None => {
            actions.push(DetailAction::ConnectWallet);
            labels.push("Connect wallet".to_string());
        }
        Some(_) => {
            if status == BountyStatus::Open {
                actions.push(DetailAction::Claim);
                labels.push("Claim this bounty".to_string());
            }
            if status == BountyStatus::InProgress && is_maintainer {
                actions.push(DetailAction::Release);
                labels.push("Approve & release funds".to_string());
            }
        }
    }
    actions.push(DetailAction::Back);
    labels.push("Back to explore".to_string());

    let Some(choice) = select("Actions", &labels)? else {
        board.return_home();
        return Ok(());
    };

    match actions[choice] {
        DetailAction::Claim => match board.claim_bounty(id) {
            Ok(()) => println!("✅ Bounty #{} claimed — status IN_PROGRESS", id),
            Err(e) => println!("⚠️  {}", e),
        },
        DetailAction::Release => match board.release_bounty(id) {
            Ok(()) => println!("✅ Funds released — bounty #{} completed", id),
            Err(e) => println!("⚠️  {}", e),
        },
        DetailAction::ConnectWallet => connect(board),
        DetailAction::Back => board.return_home(),
    }
    Ok(())
}
