mod issue_analyzer;
mod wallet_provider;

pub use issue_analyzer::{FailingAnalyzer, IssueAnalyzer, StaticAnalyzer};
pub use wallet_provider::{FixedWalletProvider, WalletProvider};
