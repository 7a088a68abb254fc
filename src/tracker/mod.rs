//! Issue tracker access (Redmine REST API)

mod client;
mod traits;

pub use client::RedmineClient;
pub use traits::IssueTracker;

#[cfg(test)]
pub use traits::MockIssueTracker;

use thiserror::Error;

/// Errors reported by the issue tracker
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("authentication failed: invalid API key")]
    Unauthorized,

    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Other(String),
}
