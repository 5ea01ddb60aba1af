pub mod analysis;
pub mod bounty;
pub mod config;
pub mod error;
pub mod view;
pub mod wallet;

pub use analysis::{Difficulty, IssueAnalysis};
pub use bounty::{Bounty, BountyDraft, BountyStatus, DEFAULT_TAG, DEFAULT_TITLE,
    UNAUTHENTICATED_MAINTAINER};
pub use config::AnalysisApiConfig;
pub use error::AppError;
pub use view::View;
pub use wallet::WalletSession;
