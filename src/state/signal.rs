//! Typed requests emitted by screens and forms

use super::{Issue, TimeEntryRequest};

/// What a search should look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free text (or `#id`)
    Text(String),
    /// Raw issue filter from a favourite
    Filter(String),
}

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(q) | Self::Filter(q) => q,
        }
    }
}

/// Transition or async action requested by the active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    SearchSubmitted(SearchQuery),
    IssueSelected(Issue),
    TimeEntryRequested(Issue),
    SubmitTimeEntry(TimeEntryRequest),
    ReturnToIssue,
}
