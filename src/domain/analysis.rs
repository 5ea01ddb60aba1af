//! Structured suggestion produced by the issue analysis collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty rating attached to an analyzed issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        };
        f.write_str(name)
    }
}

/// Suggested bounty details for a free-text issue description.
///
/// The analysis boundary never surfaces an error to the creation flow: callers
/// receive either a real suggestion or one of the fallback records below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAnalysis {
    pub title: String,
    pub summary: String,
    pub suggested_price: u64,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl IssueAnalysis {
    /// Fallback returned when no API credentials are configured.
    pub fn missing_credentials() -> Self {
        Self {
            title: "Manual Issue Entry".to_string(),
            summary: "API Key missing. Simulating analysis...".to_string(),
            suggested_price: 100,
            difficulty: Difficulty::Medium,
            tags: vec!["Unknown".to_string()],
        }
    }

    /// Fallback returned when the analysis call fails or yields no usable result.
    pub fn analysis_failed() -> Self {
        Self {
            title: "New Bounty".to_string(),
            summary: "Could not analyze automatically. Please set details manually.".to_string(),
            suggested_price: 50,
            difficulty: Difficulty::Medium,
            tags: vec!["Manual".to_string()],
        }
    }
}
