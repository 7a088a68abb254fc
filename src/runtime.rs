//! Event queue and background task execution
//!
//! Terminal input and the completions of spawned tracker calls share one
//! queue. Every task carries a [`RequestId`] so the controller can tell a
//! current completion from a stale one.

use crate::state::{Issue, SearchQuery, TimeEntry, TimeEntryForm, TimeEntryRequest};
use crate::tracker::IssueTracker;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Monotonic id of an asynchronous request
pub type RequestId = u64;

/// Everything the controller reacts to
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// New terminal size (columns, rows)
    Resize(u16, u16),
    /// Animation heartbeat
    Tick,
    SearchCompleted {
        id: RequestId,
        result: Result<Vec<Issue>, String>,
    },
    FormOpened {
        id: RequestId,
        result: Result<Box<TimeEntryForm>, String>,
    },
    TimeEntryCreated {
        id: RequestId,
        result: Result<TimeEntry, String>,
    },
}

/// Asynchronous work requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Search {
        id: RequestId,
        query: SearchQuery,
    },
    OpenTimeEntryForm {
        id: RequestId,
        issue: Issue,
        today: NaiveDate,
    },
    CreateTimeEntry {
        id: RequestId,
        request: TimeEntryRequest,
    },
}

impl Task {
    pub fn id(&self) -> RequestId {
        match self {
            Self::Search { id, .. }
            | Self::OpenTimeEntryForm { id, .. }
            | Self::CreateTimeEntry { id, .. } => *id,
        }
    }

    /// Run the task against the tracker and describe its outcome
    pub async fn run(self, tracker: &dyn IssueTracker) -> AppEvent {
        match self {
            Self::Search { id, query } => {
                let result = match &query {
                    SearchQuery::Text(text) => tracker.search(text).await,
                    SearchQuery::Filter(filter) => tracker.search_with_filter(filter).await,
                };
                AppEvent::SearchCompleted {
                    id,
                    result: result.map_err(|e| e.to_string()),
                }
            }
            Self::OpenTimeEntryForm { id, issue, today } => AppEvent::FormOpened {
                id,
                result: TimeEntryForm::load(tracker, issue, today)
                    .await
                    .map(Box::new)
                    .map_err(|e| e.to_string()),
            },
            Self::CreateTimeEntry { id, request } => AppEvent::TimeEntryCreated {
                id,
                result: tracker
                    .create_time_entry(&request)
                    .await
                    .map_err(|e| e.to_string()),
            },
        }
    }
}

pub type EventTx = UnboundedSender<AppEvent>;
pub type EventRx = UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventTx, EventRx) {
    mpsc::unbounded_channel()
}

/// Spawns tasks on the tokio runtime and posts their completions
#[derive(Clone)]
pub struct TaskRunner {
    tracker: Arc<dyn IssueTracker>,
    tx: EventTx,
}

impl TaskRunner {
    pub fn new(tracker: Arc<dyn IssueTracker>, tx: EventTx) -> Self {
        Self { tracker, tx }
    }

    pub fn spawn(&self, task: Task) {
        tracing::debug!("Spawning {task:?}");
        let tracker = Arc::clone(&self.tracker);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = task.run(tracker.as_ref()).await;
            if tx.send(event).is_err() {
                tracing::warn!("Event queue closed before task completion was delivered");
            }
        });
    }

    pub fn spawn_all(&self, tasks: Vec<Task>) {
        for task in tasks {
            self.spawn(task);
        }
    }
}
