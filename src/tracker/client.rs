//! REST client for communicating with a Redmine server
//!
//! Translates between the Redmine JSON API and the domain values in
//! [`crate::state`].

use super::{IssueTracker, TrackerError};
use crate::state::{Activity, Issue, Project, TimeEntry, TimeEntryRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

/// Request timeout for every call to the tracker
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the Redmine API key
const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Page size requested for filter queries
pub const FILTER_LIMIT: u32 = 100;

/// Redmine JSON payloads
pub mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize)]
    pub struct NamedRef {
        pub id: u32,
        #[serde(default)]
        pub name: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct IdRef {
        pub id: u32,
    }

    #[derive(Debug, Deserialize)]
    pub struct Issue {
        pub id: u32,
        #[serde(default)]
        pub subject: String,
        #[serde(default)]
        pub description: Option<String>,
        pub author: Option<NamedRef>,
        pub project: Option<NamedRef>,
    }

    #[derive(Debug, Deserialize)]
    pub struct IssueEnvelope {
        pub issue: Issue,
    }

    #[derive(Debug, Deserialize)]
    pub struct IssueList {
        #[serde(default)]
        pub issues: Vec<Issue>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub id: u32,
        #[serde(default)]
        pub url: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchResults {
        #[serde(default)]
        pub results: Vec<SearchResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Project {
        #[serde(default)]
        pub time_entry_activities: Vec<NamedRef>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ProjectEnvelope {
        pub project: Project,
    }

    #[derive(Debug, Serialize)]
    pub struct NewTimeEntry<'a> {
        pub issue_id: u32,
        pub hours: f64,
        #[serde(skip_serializing_if = "is_zero")]
        pub activity_id: u32,
        pub comments: &'a str,
        pub spent_on: &'a str,
    }

    fn is_zero(value: &u32) -> bool {
        *value == 0
    }

    #[derive(Debug, Serialize)]
    pub struct NewTimeEntryEnvelope<'a> {
        pub time_entry: NewTimeEntry<'a>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TimeEntry {
        pub id: u32,
        pub hours: f64,
        #[serde(default)]
        pub comments: String,
        #[serde(default)]
        pub spent_on: String,
        pub issue: Option<IdRef>,
        pub activity: Option<NamedRef>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TimeEntryEnvelope {
        pub time_entry: TimeEntry,
    }
}

/// Client for the Redmine REST API
pub struct RedmineClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    /// Only activities whose name starts with one of these are offered
    activity_prefixes: Vec<String>,
}

impl RedmineClient {
    /// Create a new client for the given server
    pub fn new(
        base_url: &str,
        api_key: &str,
        activity_prefixes: Vec<String>,
    ) -> Result<Self, TrackerError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| TrackerError::Transport {
                path: base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
            activity_prefixes,
        })
    }

    /// Canonical browser link of an issue
    pub fn issue_link(&self, id: u32) -> String {
        format!("{}/issues/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TrackerError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|source| TrackerError::Transport {
                path: path.to_string(),
                source,
            })?;

        decode(path, response).await
    }

    fn to_issue(&self, issue: wire::Issue, link: Option<String>) -> Issue {
        Issue {
            id: issue.id,
            link: link.unwrap_or_else(|| self.issue_link(issue.id)),
            author: issue.author.map(|a| a.name).unwrap_or_default(),
            title: clean_title(&issue.subject),
            project: issue.project.map(|p| Project {
                id: p.id,
                name: p.name,
            }),
            description: issue.description.unwrap_or_default(),
        }
    }

    async fn fetch_issue(&self, id: u32) -> Result<wire::Issue, TrackerError> {
        let envelope: wire::IssueEnvelope =
            self.get_json(&format!("/issues/{id}.json"), &[]).await?;
        Ok(envelope.issue)
    }
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, TrackerError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(TrackerError::Unauthorized);
    }
    if !status.is_success() {
        return Err(TrackerError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| TrackerError::Decode {
            path: path.to_string(),
            source,
        })
}

/// Drop a leading `"<tracker> #id: "` style prefix from an issue subject
pub fn clean_title(subject: &str) -> String {
    match subject.split_once(": ") {
        Some((_, rest)) => rest.to_string(),
        None => subject.to_string(),
    }
}

/// Parse `#123` style queries into an issue id
pub fn parse_issue_reference(query: &str) -> Option<u32> {
    query.trim().strip_prefix('#')?.parse().ok()
}

/// Issue list path for a raw filter query, capped at [`FILTER_LIMIT`] results
/// unless the query sets its own `limit`
pub fn filter_path(filter: &str) -> String {
    let filter = filter.trim_start_matches('?');
    let has_limit = filter
        .split('&')
        .any(|pair| pair == "limit" || pair.starts_with("limit="));

    match (filter.is_empty(), has_limit) {
        (true, _) => format!("/issues.json?limit={FILTER_LIMIT}"),
        (false, true) => format!("/issues.json?{filter}"),
        (false, false) => format!("/issues.json?{filter}&limit={FILTER_LIMIT}"),
    }
}

/// Whether an activity passes the configured prefix filter
pub fn matches_activity_prefixes(name: &str, prefixes: &[String]) -> bool {
    prefixes.is_empty() || prefixes.iter().any(|p| name.starts_with(p.as_str()))
}

#[async_trait]
impl IssueTracker for RedmineClient {
    async fn search(&self, query: &str) -> Result<Vec<Issue>, TrackerError> {
        if let Some(id) = parse_issue_reference(query) {
            return Ok(vec![self.get_issue(id).await?]);
        }

        let results: wire::SearchResults = self
            .get_json("/search.json", &[("q", query), ("issues", "1")])
            .await?;

        let mut issues = Vec::with_capacity(results.results.len());
        for hit in results.results {
            let details = self.fetch_issue(hit.id).await?;
            let link = (!hit.url.is_empty()).then_some(hit.url);
            issues.push(self.to_issue(details, link));
        }

        tracing::info!("Search {query:?} returned {} issues", issues.len());
        Ok(issues)
    }

    async fn search_with_filter(&self, filter: &str) -> Result<Vec<Issue>, TrackerError> {
        let path = filter_path(filter);
        let list: wire::IssueList = self.get_json(&path, &[]).await?;

        Ok(list
            .issues
            .into_iter()
            .map(|issue| self.to_issue(issue, None))
            .collect())
    }

    async fn get_issue(&self, id: u32) -> Result<Issue, TrackerError> {
        let issue = self.fetch_issue(id).await?;
        Ok(self.to_issue(issue, None))
    }

    async fn get_project_activities(
        &self,
        project_id: u32,
    ) -> Result<BTreeMap<u32, String>, TrackerError> {
        let envelope: wire::ProjectEnvelope = self
            .get_json(
                &format!("/projects/{project_id}.json"),
                &[("include", "time_entry_activities")],
            )
            .await?;

        Ok(envelope
            .project
            .time_entry_activities
            .into_iter()
            .filter(|a| matches_activity_prefixes(&a.name, &self.activity_prefixes))
            .map(|a| (a.id, a.name))
            .collect())
    }

    async fn create_time_entry(
        &self,
        request: &TimeEntryRequest,
    ) -> Result<TimeEntry, TrackerError> {
        let path = "/time_entries.json";
        let body = wire::NewTimeEntryEnvelope {
            time_entry: wire::NewTimeEntry {
                issue_id: request.issue_id,
                hours: request.hours,
                activity_id: request.activity_id,
                comments: &request.comments,
                spent_on: &request.spent_on,
            },
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| TrackerError::Transport {
                path: path.to_string(),
                source,
            })?;

        let created: wire::TimeEntryEnvelope = decode(path, response).await?;
        let entry = created.time_entry;
        tracing::info!(
            "Created time entry {} ({}h on issue #{})",
            entry.id,
            entry.hours,
            request.issue_id
        );

        Ok(TimeEntry {
            id: entry.id,
            issue_id: entry.issue.map(|i| i.id).unwrap_or(request.issue_id),
            hours: entry.hours,
            comments: entry.comments,
            spent_on: entry.spent_on,
            activity: entry.activity.map(|a| Activity {
                id: a.id,
                name: a.name,
            }),
        })
    }
}
