//! Analyzer used when no API credentials are configured.

use crate::domain::{AppError, IssueAnalysis};
use crate::ports::IssueAnalyzer;

/// Credential-less analyzer: always returns the missing-key fallback record.
///
/// Selected at composition time when `GEMINI_API_KEY` is absent so the
/// creation flow keeps working without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAnalyzer;

impl IssueAnalyzer for OfflineAnalyzer {
    fn analyze_issue(&self, _issue_content: &str) -> Result<IssueAnalysis, AppError> {
        Ok(IssueAnalysis::missing_credentials())
    }
}
