//! Time entry form: field widgets, focus ring and submit lifecycle

use super::FormFocus;
use crate::state::{
    Activity, DatePicker, HoursSelector, Issue, Signal, TextInput, TimeEntry, TimeEntryRequest,
};
use crate::tracker::{IssueTracker, TrackerError};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;

/// Inline message shown when validation fails
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields";

/// Lifecycle of a time entry submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Completed,
    Error(String),
}

/// Current, uncommitted values of the form widgets
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryDraft {
    pub date: NaiveDate,
    pub hours: f64,
    pub comments: String,
    pub activity_id: Option<u32>,
}

impl TimeEntryDraft {
    /// Whether the draft can be submitted
    pub fn is_valid(&self, has_activities: bool) -> bool {
        self.hours > 0.0
            && !self.comments.trim().is_empty()
            && (!has_activities || self.activity_id.is_some())
    }

    pub fn into_request(self, issue_id: u32) -> TimeEntryRequest {
        TimeEntryRequest {
            issue_id,
            activity_id: self.activity_id.unwrap_or(0),
            hours: self.hours,
            comments: self.comments.trim().to_string(),
            spent_on: self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Form for logging time against one issue
#[derive(Debug, Clone)]
pub struct TimeEntryForm {
    issue: Issue,
    pub date: DatePicker,
    pub hours: HoursSelector,
    pub description: TextInput,
    activities: Vec<Activity>,
    activity_index: Option<usize>,
    focus: FormFocus,
    state: FormState,
    validation_error: Option<String>,
    receipt: Option<TimeEntry>,
}

impl TimeEntryForm {
    /// Build a form after fetching the activities of the issue's project
    pub async fn load(
        tracker: &dyn IssueTracker,
        issue: Issue,
        today: NaiveDate,
    ) -> Result<Self, TrackerError> {
        let activities = tracker.get_project_activities(issue.project_id()).await?;
        tracing::debug!(
            "Loaded {} activities for issue #{}",
            activities.len(),
            issue.id
        );
        Ok(Self::new(issue, activities, today))
    }

    pub fn new(issue: Issue, activities: BTreeMap<u32, String>, today: NaiveDate) -> Self {
        let activities: Vec<Activity> = activities
            .into_iter()
            .map(|(id, name)| Activity { id, name })
            .collect();
        let activity_index = (!activities.is_empty()).then_some(0);

        let mut date = DatePicker::new(today);
        date.focus();

        Self {
            issue,
            date,
            hours: HoursSelector::new(),
            description: TextInput::new("What did you work on?"),
            activities,
            activity_index,
            focus: FormFocus::default(),
            state: FormState::default(),
            validation_error: None,
            receipt: None,
        }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.activity_index.and_then(|i| self.activities.get(i))
    }

    pub fn activity_index(&self) -> Option<usize> {
        self.activity_index
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Time entry created by the last successful submission
    pub fn receipt(&self) -> Option<&TimeEntry> {
        self.receipt.as_ref()
    }

    /// Snapshot of the widget values
    pub fn draft(&self) -> TimeEntryDraft {
        TimeEntryDraft {
            date: self.date.selected(),
            hours: self.hours.value(),
            comments: self.description.value().to_string(),
            activity_id: self.selected_activity().map(|a| a.id),
        }
    }

    /// Select an activity by id
    pub fn select_activity(&mut self, id: u32) {
        if let Some(index) = self.activities.iter().position(|a| a.id == id) {
            self.activity_index = Some(index);
        }
    }

    fn set_focus(&mut self, focus: FormFocus) {
        match self.focus {
            FormFocus::Date => self.date.blur(),
            FormFocus::Hours => self.hours.blur(),
            FormFocus::Description => self.description.blur(),
            FormFocus::Activity | FormFocus::Submit => {}
        }
        self.focus = focus;
        match focus {
            FormFocus::Date => self.date.focus(),
            FormFocus::Hours => self.hours.focus(),
            FormFocus::Description => self.description.focus(),
            FormFocus::Activity | FormFocus::Submit => {}
        }
    }

    /// Apply a key press, possibly requesting a transition
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Signal> {
        match self.state {
            FormState::Editing => self.handle_editing_key(key),
            FormState::Submitting => None,
            FormState::Completed => Some(Signal::ReturnToIssue),
            FormState::Error(_) => {
                if key.code == KeyCode::Enter {
                    self.state = FormState::Editing;
                    None
                } else {
                    Some(Signal::ReturnToIssue)
                }
            }
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Signal> {
        if key.code != KeyCode::Enter {
            self.validation_error = None;
        }

        match key.code {
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return None;
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.set_focus(self.focus.prev());
                return None;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return None;
            }
            _ => {}
        }

        match self.focus {
            FormFocus::Date => self.date.handle_key(key),
            FormFocus::Hours => self.hours.handle_key(key),
            FormFocus::Description => self.description.handle_key(key),
            FormFocus::Activity => self.move_activity(key.code),
            FormFocus::Submit => {
                if key.code == KeyCode::Enter {
                    return self.submit();
                }
            }
        }
        None
    }

    fn move_activity(&mut self, code: KeyCode) {
        let Some(index) = self.activity_index else {
            return;
        };
        self.activity_index = Some(match code {
            KeyCode::Up => index.saturating_sub(1),
            KeyCode::Down => (index + 1).min(self.activities.len().saturating_sub(1)),
            _ => index,
        });
    }

    fn submit(&mut self) -> Option<Signal> {
        let draft = self.draft();
        if !draft.is_valid(!self.activities.is_empty()) {
            self.validation_error = Some(VALIDATION_MESSAGE.to_string());
            return None;
        }

        self.validation_error = None;
        self.state = FormState::Submitting;
        tracing::info!(
            "Submitting {}h on issue #{} for {}",
            draft.hours,
            self.issue.id,
            draft.date
        );
        Some(Signal::SubmitTimeEntry(draft.into_request(self.issue.id)))
    }

    /// Apply the outcome of the create call
    pub fn apply_submission(&mut self, result: Result<TimeEntry, String>) {
        match result {
            Ok(entry) => {
                self.receipt = Some(entry);
                self.state = FormState::Completed;
            }
            Err(message) => {
                tracing::warn!("Time entry for issue #{} failed: {message}", self.issue.id);
                self.state = FormState::Error(message);
            }
        }
    }
}
