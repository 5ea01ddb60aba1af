//! Issue analysis port definition.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AppError, IssueAnalysis};

/// Port for the external issue analysis collaborator.
///
/// Implementations may block for an external round trip. Callers must treat
/// the call as fallible; the board maps errors to the failure fallback so the
/// creation flow is never blocked.
pub trait IssueAnalyzer {
    /// Produce suggested bounty details for a non-empty issue description.
    fn analyze_issue(&self, issue_content: &str) -> Result<IssueAnalysis, AppError>;
}

impl IssueAnalyzer for Box<dyn IssueAnalyzer> {
    fn analyze_issue(&self, issue_content: &str) -> Result<IssueAnalysis, AppError> {
        (**self).analyze_issue(issue_content)
    }
}

impl<A: IssueAnalyzer + ?Sized> IssueAnalyzer for &A {
    fn analyze_issue(&self, issue_content: &str) -> Result<IssueAnalysis, AppError> {
        (**self).analyze_issue(issue_content)
    }
}

/// Canned analyzer for tests: returns a fixed suggestion and counts calls.
#[derive(Debug)]
pub struct StaticAnalyzer {
    suggestion: IssueAnalysis,
    calls: AtomicUsize,
}

impl StaticAnalyzer {
    pub fn new(suggestion: IssueAnalysis) -> Self {
        Self { suggestion, calls: AtomicUsize::new(0) }
    }

    /// Number of times `analyze_issue` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StaticAnalyzer {
    fn default() -> Self {
        Self::new(IssueAnalysis::analysis_failed())
    }
}

impl IssueAnalyzer for StaticAnalyzer {
    fn analyze_issue(&self, _issue_content: &str) -> Result<IssueAnalysis, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.suggestion.clone())
    }
}

/// Analyzer that always fails, for exercising the fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingAnalyzer;

impl IssueAnalyzer for FailingAnalyzer {
    fn analyze_issue(&self, _issue_content: &str) -> Result<IssueAnalysis, AppError> {
        Err(AppError::AnalysisApi { message: "simulated outage".to_string(), status: Some(500) })
    }
}
