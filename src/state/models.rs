//! Domain values shared by screens, forms and the tracker client

use serde::{Deserialize, Serialize};

/// Number of characters kept by the list projections of an issue
const DISPLAY_LIMIT: usize = 55;

/// Project an issue belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: String,
}

/// Issue information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: u32,
    pub link: String,
    pub author: String,
    pub title: String,
    pub project: Option<Project>,
    pub description: String,
}

impl Issue {
    /// Title shortened for list rendering
    pub fn display_title(&self) -> String {
        self.title.chars().take(DISPLAY_LIMIT).collect()
    }

    /// Single-line, shortened description for list rendering.
    ///
    /// Bullet lines (`\n*`) are joined with commas, remaining newlines become
    /// spaces and runs of whitespace collapse to a single space.
    pub fn display_description(&self) -> String {
        let joined = self.description.replace("\n*", ", ").replace('\n', " ");
        let squeezed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        if squeezed.is_empty() {
            return "-- no description --".to_string();
        }
        squeezed.chars().take(DISPLAY_LIMIT).collect()
    }

    /// Composite string the list filter matches against
    pub fn filter_value(&self) -> String {
        format!("{} {} {}", self.link, self.author, self.title)
    }

    /// Project id used for activity lookups (0 when the issue has no project)
    pub fn project_id(&self) -> u32 {
        self.project.as_ref().map(|p| p.id).unwrap_or(0)
    }

    pub fn project_name(&self) -> &str {
        self.project
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("--no-project--")
    }
}

/// Time tracking activity available for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub name: String,
}

/// Saved issue query shown on the search screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u32,
    pub name: String,
    pub query: String,
}

/// Immutable request built from a submitted time entry draft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntryRequest {
    pub issue_id: u32,
    /// 0 when the project offers no activities
    pub activity_id: u32,
    pub hours: f64,
    pub comments: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    pub spent_on: String,
}

/// Time entry as stored by the tracker
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: u32,
    pub issue_id: u32,
    pub hours: f64,
    pub comments: String,
    pub spent_on: String,
    pub activity: Option<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_with(title: &str, description: &str) -> Issue {
        Issue {
            id: 7,
            link: "https://redmine.example/issues/7".to_string(),
            author: "Alice".to_string(),
            title: title.to_string(),
            project: None,
            description: description.to_string(),
        }
    }

    mod display {
        use super::*;

        #[test]
        fn test_short_title_is_unchanged() {
            let issue = issue_with("Fix login", "");
            assert_eq!(issue.display_title(), "Fix login");
        }

        #[test]
        fn test_long_title_is_truncated_by_characters() {
            let title = "ä".repeat(80);
            let issue = issue_with(&title, "");
            assert_eq!(issue.display_title().chars().count(), 55);
        }

        #[test]
        fn test_empty_description_placeholder() {
            let issue = issue_with("t", "  \n ");
            assert_eq!(issue.display_description(), "-- no description --");
        }

        #[test]
        fn test_description_bullets_are_joined() {
            let issue = issue_with("t", "Steps:\n* open\n* click");
            assert_eq!(issue.display_description(), "Steps:, open, click");
        }

        #[test]
        fn test_description_whitespace_is_squeezed() {
            let issue = issue_with("t", "a   b\n\nc");
            assert_eq!(issue.display_description(), "a b c");
        }
    }

    mod filtering {
        use super::*;

        #[test]
        fn test_filter_value_combines_link_author_title() {
            let issue = issue_with("Broken build", "not included");
            assert_eq!(
                issue.filter_value(),
                "https://redmine.example/issues/7 Alice Broken build"
            );
        }
    }

    mod project {
        use super::*;

        #[test]
        fn test_project_id_defaults_to_zero() {
            let issue = issue_with("t", "");
            assert_eq!(issue.project_id(), 0);
            assert_eq!(issue.project_name(), "--no-project--");
        }

        #[test]
        fn test_project_id_from_project() {
            let mut issue = issue_with("t", "");
            issue.project = Some(Project {
                id: 12,
                name: "Infra".to_string(),
            });
            assert_eq!(issue.project_id(), 12);
            assert_eq!(issue.project_name(), "Infra");
        }
    }
}
