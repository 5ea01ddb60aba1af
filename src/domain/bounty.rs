//! Bounty entity model: the funded-task record and its status lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};

/// Maintainer identity recorded when a bounty is created without a connected wallet.
pub const UNAUTHENTICATED_MAINTAINER: &str = "0xSimulatedUser";

/// Title applied when a draft arrives with a blank title.
pub const DEFAULT_TITLE: &str = "New Bounty";

/// Tag applied when a draft arrives with no tags.
pub const DEFAULT_TAG: &str = "Manual";

/// Lifecycle status of a bounty.
///
/// Status only advances `Open -> InProgress -> Completed`. `Cancelled` exists
/// in the model but no operation currently transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BountyStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl BountyStatus {
    /// Wire/display identifier for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BountyStatus::Open => "OPEN",
            BountyStatus::InProgress => "IN_PROGRESS",
            BountyStatus::Completed => "COMPLETED",
            BountyStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable label used by the detail view.
    pub fn label(&self) -> &'static str {
        match self {
            BountyStatus::Open => "Open for Claims",
            BountyStatus::InProgress => "In Progress",
            BountyStatus::Completed => "Completed",
            BountyStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BountyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A funded task tracked by the board.
///
/// Invariant: `worker_address` is `Some` iff `status` is `InProgress` or
/// `Completed`. Once claimed, the worker identity persists through completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounty {
    /// Unique id assigned by the board; never reused.
    pub id: u64,
    /// Opaque reference to the originating issue; not validated for reachability.
    pub github_issue_url: String,
    pub title: String,
    pub description: String,
    /// Reward amount; immutable after creation (no partial funding or top-ups).
    pub amount_usdc: u64,
    pub status: BountyStatus,
    /// Identity of the creator; set once.
    pub maintainer_address: String,
    /// Identity of the claimant; set exactly once, on claim.
    pub worker_address: Option<String>,
    /// Insertion order preserved for display; duplicates not removed.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Bounty {
    /// Whether the given identity created this bounty.
    pub fn is_maintainer(&self, address: &str) -> bool {
        self.maintainer_address == address
    }

    /// Whether the given identity claimed this bounty.
    pub fn is_worker(&self, address: &str) -> bool {
        self.worker_address.as_deref() == Some(address)
    }

    /// Case-insensitive substring match against the title or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// Explicit, fully-typed creation payload.
///
/// Defaulting happens in [`BountyDraft::normalized`], not at call sites: a
/// blank title becomes [`DEFAULT_TITLE`] and an empty tag list becomes a
/// single [`DEFAULT_TAG`].
#[derive(Debug, Clone, Default)]
pub struct BountyDraft {
    pub github_issue_url: String,
    pub title: String,
    pub description: String,
    pub amount_usdc: u64,
    pub tags: Vec<String>,
}

impl BountyDraft {
    /// Apply the defaulting rules, consuming the draft.
    pub fn normalized(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.tags.is_empty() {
            self.tags = vec![DEFAULT_TAG.to_string()];
        }
        self
    }
}
