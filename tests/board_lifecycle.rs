//! Lifecycle properties of the bounty board, driven through the library API
//! with fake collaborators.

use basebounties::BountyBoard;
use basebounties::adapters::{OfflineAnalyzer, SIMULATED_ADDRESS, SimulatedWalletProvider};
use basebounties::domain::{
    AppError, BountyDraft, BountyStatus, IssueAnalysis, UNAUTHENTICATED_MAINTAINER,
};
use basebounties::ports::{FailingAnalyzer, FixedWalletProvider, StaticAnalyzer};

const WALLET: &str = "0x71C...9A21";

fn board() -> BountyBoard<StaticAnalyzer, FixedWalletProvider> {
    BountyBoard::new(StaticAnalyzer::default(), FixedWalletProvider::new(WALLET, 5000))
}

fn draft(title: &str, amount: u64, tags: &[&str]) -> BountyDraft {
    BountyDraft {
        github_issue_url: "https://github.com/owner/repo/issues/1".to_string(),
        title: title.to_string(),
        description: "details".to_string(),
        amount_usdc: amount,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn create_assigns_unique_ids_and_lists_newest_first() {
    let mut board = board();
    let first = board.create_bounty(draft("first", 100, &["a"])).id;
    let second = board.create_bounty(draft("second", 200, &["b"])).id;

    assert_ne!(first, second);
    let ids: Vec<u64> = board.bounties().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(board.bounties().iter().all(|b| b.status == BountyStatus::Open));
}

#[test]
fn create_while_disconnected_uses_the_sentinel_maintainer() {
    let mut board = board();
    let bounty = board.create_bounty(draft("Fix login bug", 300, &["bug", "auth"]));
    assert_eq!(bounty.maintainer_address, UNAUTHENTICATED_MAINTAINER);
    assert_eq!(bounty.status, BountyStatus::Open);
    assert_eq!(bounty.amount_usdc, 300);
}

#[test]
fn claim_while_disconnected_fails_and_leaves_the_bounty_unchanged() {
    let mut board = board();
    let id = board.create_bounty(draft("open", 100, &[])).id;

    let err = board.claim_bounty(id).unwrap_err();
    assert!(matches!(err, AppError::WalletNotConnected));

    let bounty = &board.bounties()[0];
    assert_eq!(bounty.status, BountyStatus::Open);
    assert!(bounty.worker_address.is_none());
}

#[test]
fn claim_records_the_connected_wallet_as_worker() {
    let mut board = board();
    board.connect_wallet();
    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.claim_bounty(id).unwrap();

    let bounty = &board.bounties()[0];
    assert_eq!(bounty.status, BountyStatus::InProgress);
    assert_eq!(bounty.worker_address.as_deref(), Some(WALLET));
}

#[test]
fn claim_through_the_simulated_wallet_uses_the_fixed_identity() {
    let mut board =
        BountyBoard::new(StaticAnalyzer::default(), SimulatedWalletProvider::instant());
    board.connect_wallet();
    assert_eq!(board.session().address.as_deref(), Some(SIMULATED_ADDRESS));

    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.claim_bounty(id).unwrap();
    assert_eq!(board.bounties()[0].worker_address.as_deref(), Some(SIMULATED_ADDRESS));
}

#[test]
fn claim_of_missing_bounty_is_not_found() {
    let mut board = board();
    board.connect_wallet();
    assert!(matches!(board.claim_bounty(99), Err(AppError::BountyNotFound(99))));
}

#[test]
fn claim_of_completed_bounty_is_rejected() {
    let mut board = board();
    board.connect_wallet();
    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.claim_bounty(id).unwrap();
    board.release_bounty(id).unwrap();

    let err = board.claim_bounty(id).unwrap_err();
    assert!(matches!(
        err,
        AppError::AlreadyClaimed { id: 1, status: BountyStatus::Completed }
    ));
}

#[test]
fn repeat_claim_by_the_same_worker_is_idempotent() {
    let mut board = board();
    board.connect_wallet();
    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.claim_bounty(id).unwrap();
    board.claim_bounty(id).unwrap();

    let bounty = &board.bounties()[0];
    assert_eq!(bounty.status, BountyStatus::InProgress);
    assert_eq!(bounty.worker_address.as_deref(), Some(WALLET));
}

#[test]
fn release_completes_and_keeps_the_worker() {
    let mut board = board();
    board.connect_wallet();
    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.claim_bounty(id).unwrap();
    board.release_bounty(id).unwrap();

    let bounty = &board.bounties()[0];
    assert_eq!(bounty.status, BountyStatus::Completed);
    assert_eq!(bounty.worker_address.as_deref(), Some(WALLET));
}

#[test]
fn release_by_a_non_maintainer_is_rejected() {
    let mut board = board();
    // Created while disconnected, so the maintainer is the sentinel identity.
    let id = board.create_bounty(draft("open", 100, &[])).id;
    board.connect_wallet();
    board.claim_bounty(id).unwrap();

    let err = board.release_bounty(id).unwrap_err();
    assert!(matches!(err, AppError::NotMaintainer { id: 1, .. }));
    assert_eq!(board.bounties()[0].status, BountyStatus::InProgress);
}

#[test]
fn release_of_an_unclaimed_bounty_is_rejected() {
    let mut board = board();
    board.connect_wallet();
    let id = board.create_bounty(draft("open", 100, &[])).id;

    let err = board.release_bounty(id).unwrap_err();
    assert!(matches!(err, AppError::NotInProgress { id: 1, status: BountyStatus::Open }));
}

#[test]
fn filter_empty_query_returns_everything_in_order() {
    let mut board = board();
    board.create_bounty(draft("alpha", 100, &["x"]));
    board.create_bounty(draft("beta", 100, &["y"]));

    let all: Vec<&str> = board.filter_bounties("").iter().map(|b| b.title.as_str()).collect();
    assert_eq!(all, vec!["beta", "alpha"]);
}

#[test]
fn filter_matches_title_or_tag_case_insensitively() {
    let mut board = board();
    board.create_bounty(draft("Fix Login Bug", 100, &["auth"]));
    board.create_bounty(draft("Dark mode charts", 100, &["Frontend"]));

    let by_title: Vec<&str> =
        board.filter_bounties("login").iter().map(|b| b.title.as_str()).collect();
    assert_eq!(by_title, vec!["Fix Login Bug"]);

    let by_tag: Vec<&str> =
        board.filter_bounties("FRONT").iter().map(|b| b.title.as_str()).collect();
    assert_eq!(by_tag, vec!["Dark mode charts"]);

    assert!(board.filter_bounties("payments").is_empty());
}

#[test]
fn created_bounty_round_trips_through_select() {
    let mut board = board();
    let draft = draft("Fix login bug", 300, &["bug", "auth"]);
    let created = board.create_bounty(draft.clone()).clone();

    let selected = board.select_bounty(created.id).unwrap();
    assert_eq!(*selected, created);
    // Controller-assigned fields aside, the record mirrors the draft.
    assert_eq!(selected.title, draft.title);
    assert_eq!(selected.description, draft.description);
    assert_eq!(selected.github_issue_url, draft.github_issue_url);
    assert_eq!(selected.amount_usdc, draft.amount_usdc);
    assert_eq!(selected.tags, draft.tags);
}

#[test]
fn empty_issue_text_never_reaches_the_analyzer() {
    let analyzer = StaticAnalyzer::default();
    let board = BountyBoard::new(&analyzer, FixedWalletProvider::new(WALLET, 5000));

    assert!(board.suggest_bounty_details("").is_none());
    assert!(board.suggest_bounty_details("   \n\t").is_none());
    assert_eq!(analyzer.call_count(), 0);

    assert!(board.suggest_bounty_details("real content").is_some());
    assert_eq!(analyzer.call_count(), 1);
}

#[test]
fn failing_analyzer_degrades_to_the_failure_fallback() {
    let board = BountyBoard::new(FailingAnalyzer, FixedWalletProvider::new(WALLET, 5000));
    let suggestion = board.suggest_bounty_details("broken build").unwrap();
    assert_eq!(suggestion, IssueAnalysis::analysis_failed());
}

#[test]
fn offline_analyzer_reports_the_missing_credentials_fallback() {
    let board = BountyBoard::new(OfflineAnalyzer, FixedWalletProvider::new(WALLET, 5000));
    let suggestion = board.suggest_bounty_details("anything").unwrap();
    assert_eq!(suggestion, IssueAnalysis::missing_credentials());
}
