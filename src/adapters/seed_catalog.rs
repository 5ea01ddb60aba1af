//! Embedded starter bounties that populate the board on launch.

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::AppError;

static SEED_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/seed");

/// A starter bounty as authored in `src/assets/seed/*.toml`.
///
/// Seeds are installed as `Open` bounties through the board's normal creation
/// machinery, so they receive fresh ids and the usual newest-first ordering.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedBounty {
    pub title: String,
    pub description: String,
    pub github_issue_url: String,
    pub amount_usdc: u64,
    pub tags: Vec<String>,
    pub maintainer_address: String,
}

/// Parse every embedded seed file, in file-name order.
pub fn load_seed_bounties() -> Result<Vec<SeedBounty>, AppError> {
    let mut files: Vec<_> = SEED_DIR.files().collect();
    files.sort_by_key(|file| file.path().to_path_buf());

    let mut seeds = Vec::with_capacity(files.len());
    for file in files {
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::MalformedSeed(format!("{} is not UTF-8", file.path().display()))
        })?;
        let seed: SeedBounty = toml::from_str(content).map_err(|e| {
            AppError::MalformedSeed(format!("{}: {}", file.path().display(), e))
        })?;
        seeds.push(seed);
    }
    Ok(seeds)
}
