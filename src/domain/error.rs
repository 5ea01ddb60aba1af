use std::io;

use thiserror::Error;

use crate::domain::bounty::BountyStatus;

/// Library-wide error type for basebounties operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Issue analysis API call failed.
    #[error("Issue analysis failed: {message}")]
    AnalysisApi { message: String, status: Option<u16> },

    /// Embedded seed bounty file could not be parsed.
    #[error("Malformed seed bounty: {0}")]
    MalformedSeed(String),

    /// No bounty exists with the given id.
    #[error("Bounty #{0} not found")]
    BountyNotFound(u64),

    /// Operation requires a connected wallet.
    #[error("Wallet is not connected")]
    WalletNotConnected,

    /// Bounty is no longer open for claims.
    #[error("Bounty #{id} is not open for claims (status: {status})")]
    AlreadyClaimed { id: u64, status: BountyStatus },

    /// Caller is not the maintainer of the bounty.
    #[error("Only the maintainer may release bounty #{id} (caller: {caller})")]
    NotMaintainer { id: u64, caller: String },

    /// Bounty must be in progress before funds can be released.
    #[error("Bounty #{id} cannot be released from status {status}")]
    NotInProgress { id: u64, status: BountyStatus },

    /// Issue content was empty, so there is nothing to analyze.
    #[error("Issue content is empty")]
    EmptyIssueContent,

    /// Interactive input could not be read.
    #[error("{0}")]
    InvalidInput(String),
}
