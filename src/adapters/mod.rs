mod analysis_prompt;
mod gemini_client_http;
mod gemini_client_retrying;
mod offline_analyzer;
mod seed_catalog;
mod simulated_wallet;

pub use analysis_prompt::render_analysis_prompt;
pub use gemini_client_http::{AUTH_ENV_VAR, HttpGeminiClient};
pub use gemini_client_retrying::{RetryPolicy, RetryingAnalyzer};
pub use offline_analyzer::OfflineAnalyzer;
pub use seed_catalog::{SeedBounty, load_seed_bounties};
pub use simulated_wallet::{SIMULATED_ADDRESS, SIMULATED_BALANCE_USDC, SimulatedWalletProvider};
