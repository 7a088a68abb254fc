//! Trait abstraction for the issue tracker to enable mocking in tests

use super::TrackerError;
use crate::state::{Issue, TimeEntry, TimeEntryRequest};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Operations the TUI needs from the issue tracker
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Free-text search (`#123` looks up a single issue)
    async fn search(&self, query: &str) -> Result<Vec<Issue>, TrackerError>;

    /// Search with a raw issue filter query string
    async fn search_with_filter(&self, filter: &str) -> Result<Vec<Issue>, TrackerError>;

    /// Fetch a single issue
    async fn get_issue(&self, id: u32) -> Result<Issue, TrackerError>;

    /// Time tracking activities of a project, keyed by activity id
    async fn get_project_activities(
        &self,
        project_id: u32,
    ) -> Result<BTreeMap<u32, String>, TrackerError>;

    /// Log time against an issue
    async fn create_time_entry(
        &self,
        request: &TimeEntryRequest,
    ) -> Result<TimeEntry, TrackerError>;
}
