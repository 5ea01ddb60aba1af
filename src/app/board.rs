//! Bounty lifecycle controller.
//!
//! `BountyBoard` owns the authoritative bounty collection, the wallet session,
//! the id counter, and the current view. It is the sole mutator of that state;
//! presentation layers hold a board and translate user intent into the
//! operations below.

use chrono::Utc;

use crate::domain::{
    AppError, Bounty, BountyDraft, BountyStatus, IssueAnalysis, UNAUTHENTICATED_MAINTAINER, View,
    WalletSession,
};
use crate::ports::{IssueAnalyzer, WalletProvider};

pub struct BountyBoard<A: IssueAnalyzer, W: WalletProvider> {
    analyzer: A,
    wallet_provider: W,
    bounties: Vec<Bounty>,
    session: WalletSession,
    view: View,
    selected: Option<u64>,
    next_id: u64,
}

impl<A: IssueAnalyzer, W: WalletProvider> BountyBoard<A, W> {
    /// Empty board with a disconnected wallet, showing the home view.
    pub fn new(analyzer: A, wallet_provider: W) -> Self {
        Self {
            analyzer,
            wallet_provider,
            bounties: Vec::new(),
            session: WalletSession::default(),
            view: View::default(),
            selected: None,
            next_id: 1,
        }
    }

    // --- read accessors (presentation boundary) ---

    /// Authoritative collection, newest-first.
    pub fn bounties(&self) -> &[Bounty] {
        &self.bounties
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The bounty the detail view should show, if one is selected.
    pub fn selected_bounty(&self) -> Option<&Bounty> {
        let id = self.selected?;
        self.bounties.iter().find(|b| b.id == id)
    }

    /// Number of bounties still open for claims.
    pub fn open_count(&self) -> usize {
        self.bounties.iter().filter(|b| b.status == BountyStatus::Open).count()
    }

    /// Total amount described as held in escrow (open + in-progress rewards).
    pub fn total_escrowed_usdc(&self) -> u64 {
        self.bounties
            .iter()
            .filter(|b| matches!(b.status, BountyStatus::Open | BountyStatus::InProgress))
            .map(|b| b.amount_usdc)
            .sum()
    }

    // --- operations ---

    /// Request a simulated identity and store the resulting session.
    ///
    /// Never fails; the provider may block for its simulated delay. Calls made
    /// while a connection is pending observe a disconnected session.
    pub fn connect_wallet(&mut self) -> &WalletSession {
        self.session = self.wallet_provider.connect();
        &self.session
    }

    /// Create a bounty from a draft. Always succeeds.
    ///
    /// The draft's defaulting rules are applied, a fresh id is assigned, the
    /// record is inserted at the front of the collection, and the view returns
    /// to home so the new entry is visible.
    pub fn create_bounty(&mut self, draft: BountyDraft) -> &Bounty {
        let maintainer = self
            .session
            .address
            .clone()
            .unwrap_or_else(|| UNAUTHENTICATED_MAINTAINER.to_string());
        self.insert_new(draft, maintainer);
        if self.view != View::Home {
            self.view = View::Home;
        }
        &self.bounties[0]
    }

    /// Install a starter bounty with an explicit maintainer identity.
    ///
    /// Goes through the same id and ordering machinery as `create_bounty` but
    /// does not touch the current view.
    pub fn install_seed(&mut self, draft: BountyDraft, maintainer_address: &str) -> &Bounty {
        self.insert_new(draft, maintainer_address.to_string());
        &self.bounties[0]
    }

    /// Claim an open bounty for the connected wallet.
    ///
    /// A repeat claim by the worker already assigned to an in-progress bounty
    /// is an idempotent success; any other claim of a non-open bounty fails.
    pub fn claim_bounty(&mut self, id: u64) -> Result<(), AppError> {
        let caller = self.session.address.clone().ok_or(AppError::WalletNotConnected)?;
        let bounty = self
            .bounties
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BountyNotFound(id))?;

        match bounty.status {
            BountyStatus::Open => {
                bounty.status = BountyStatus::InProgress;
                bounty.worker_address = Some(caller);
                Ok(())
            }
            BountyStatus::InProgress if bounty.is_worker(&caller) => Ok(()),
            status => Err(AppError::AlreadyClaimed { id, status }),
        }
    }

    /// Release an in-progress bounty's escrowed funds to its worker.
    ///
    /// Only the maintainer may release, and only from `InProgress`. The worker
    /// identity is left untouched.
    pub fn release_bounty(&mut self, id: u64) -> Result<(), AppError> {
        let caller = self.session.address.clone().ok_or(AppError::WalletNotConnected)?;
        let bounty = self
            .bounties
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BountyNotFound(id))?;

        if !bounty.is_maintainer(&caller) {
            return Err(AppError::NotMaintainer { id, caller });
        }
        match bounty.status {
            BountyStatus::InProgress => {
                bounty.status = BountyStatus::Completed;
                Ok(())
            }
            status => Err(AppError::NotInProgress { id, status }),
        }
    }

    /// Subset of the collection matching the query, order preserved.
    ///
    /// Empty query returns everything. Matching is a case-insensitive
    /// substring test against the title or any tag.
    pub fn filter_bounties(&self, query: &str) -> Vec<&Bounty> {
        self.bounties.iter().filter(|b| b.matches(query)).collect()
    }

    /// Look up a bounty and switch the view to its detail screen.
    pub fn select_bounty(&mut self, id: u64) -> Result<&Bounty, AppError> {
        let index = self
            .bounties
            .iter()
            .position(|b| b.id == id)
            .ok_or(AppError::BountyNotFound(id))?;
        self.selected = Some(id);
        self.view = View::Details;
        Ok(&self.bounties[index])
    }

    /// Open the creation form view.
    pub fn open_create_form(&mut self) {
        self.view = View::Create;
    }

    /// Return to the home listing.
    pub fn return_home(&mut self) {
        self.view = View::Home;
    }

    /// Ask the analysis collaborator for suggested bounty details.
    ///
    /// Empty content never reaches the collaborator; a failing collaborator
    /// degrades to the failure fallback record. The creation flow therefore
    /// always receives a usable suggestion for non-empty input.
    pub fn suggest_bounty_details(&self, issue_content: &str) -> Option<IssueAnalysis> {
        let content = issue_content.trim();
        if content.is_empty() {
            return None;
        }
        Some(
            self.analyzer
                .analyze_issue(content)
                .unwrap_or_else(|_| IssueAnalysis::analysis_failed()),
        )
    }

    fn insert_new(&mut self, draft: BountyDraft, maintainer_address: String) {
        let draft = draft.normalized();
        let bounty = Bounty {
            id: self.allocate_id(),
            github_issue_url: draft.github_issue_url,
            title: draft.title,
            description: draft.description,
            amount_usdc: draft.amount_usdc,
            status: BountyStatus::Open,
            maintainer_address,
            worker_address: None,
            tags: draft.tags,
            created_at: Utc::now(),
        };
        self.bounties.insert(0, bounty);
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedWalletProvider, StaticAnalyzer};

    fn board() -> BountyBoard<StaticAnalyzer, FixedWalletProvider> {
        BountyBoard::new(StaticAnalyzer::default(), FixedWalletProvider::new("0xTest", 100))
    }

    fn draft(title: &str) -> BountyDraft {
        BountyDraft { title: title.into(), amount_usdc: 100, ..Default::default() }
    }

    #[test]
    fn create_switches_back_to_home() {
        let mut board = board();
        board.open_create_form();
        assert_eq!(board.view(), View::Create);
        board.create_bounty(draft("a"));
        assert_eq!(board.view(), View::Home);
    }

    #[test]
    fn select_switches_to_details() {
        let mut board = board();
        let id = board.create_bounty(draft("a")).id;
        board.select_bounty(id).unwrap();
        assert_eq!(board.view(), View::Details);
        assert_eq!(board.selected_bounty().unwrap().id, id);
    }

    #[test]
    fn select_unknown_id_is_not_found_and_keeps_view() {
        let mut board = board();
        assert!(matches!(board.select_bounty(42), Err(AppError::BountyNotFound(42))));
        assert_eq!(board.view(), View::Home);
        assert!(board.selected_bounty().is_none());
    }

    #[test]
    fn escrow_total_counts_open_and_in_progress_only() {
        let mut board = board();
        board.connect_wallet();
        let done = board.create_bounty(draft("done")).id;
        let active = board.create_bounty(draft("active")).id;
        board.create_bounty(draft("open"));
        board.claim_bounty(done).unwrap();
        board.claim_bounty(active).unwrap();
        board.release_bounty(done).unwrap();

        assert_eq!(board.open_count(), 1);
        assert_eq!(board.total_escrowed_usdc(), 200);
    }

    #[test]
    fn seeds_do_not_change_the_view() {
        let mut board = board();
        let id = board.create_bounty(draft("a")).id;
        board.select_bounty(id).unwrap();
        board.install_seed(draft("seed"), "0xSeed");
        assert_eq!(board.view(), View::Details);
        assert_eq!(board.bounties()[0].maintainer_address, "0xSeed");
    }
}
