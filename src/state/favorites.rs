//! Built-in and configured issue queries for the search screen

use super::Favorite;

/// Open issues assigned to the current user
const MY_OPEN_ISSUES: &str = "f%5B%5D=status_id&op%5Bstatus_id%5D=o\
&f%5B%5D=assigned_to_id&op%5Bassigned_to_id%5D=%3D&v%5Bassigned_to_id%5D%5B%5D=me";

/// Query for my open issues whose follow-up field falls in the current week
pub fn follow_up_query(field_id: u32) -> String {
    format!("{MY_OPEN_ISSUES}&f%5B%5D=cf_{field_id}&op%5Bcf_{field_id}%5D=w")
}

/// Favourites offered on the search screen, built-ins first
pub fn favorites(configured: &[Favorite], follow_up_field_id: Option<u32>) -> Vec<Favorite> {
    let mut all = Vec::with_capacity(configured.len() + 2);

    if let Some(field_id) = follow_up_field_id {
        all.push(Favorite {
            id: 1,
            name: "Follow-up this week".to_string(),
            query: follow_up_query(field_id),
        });
    }
    all.push(Favorite {
        id: 2,
        name: "My open issues".to_string(),
        query: MY_OPEN_ISSUES.to_string(),
    });
    all.extend(configured.iter().cloned());

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_without_follow_up_field() {
        let names: Vec<String> = favorites(&[], None).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["My open issues".to_string()]);
    }

    #[test]
    fn test_follow_up_comes_first() {
        let all = favorites(&[], Some(17));
        assert_eq!(all[0].name, "Follow-up this week");
        assert!(all[0].query.ends_with("&f%5B%5D=cf_17&op%5Bcf_17%5D=w"));
        assert!(all[0].query.starts_with(MY_OPEN_ISSUES));
    }

    #[test]
    fn test_configured_favorites_are_appended() {
        let custom = Favorite {
            id: 10,
            name: "Team backlog".to_string(),
            query: "project_id=3".to_string(),
        };
        let all = favorites(std::slice::from_ref(&custom), None);
        assert_eq!(all.last(), Some(&custom));
    }

    #[test]
    fn test_my_open_issues_query() {
        assert_eq!(
            MY_OPEN_ISSUES,
            "f%5B%5D=status_id&op%5Bstatus_id%5D=o&f%5B%5D=assigned_to_id&op%5Bassigned_to_id%5D=%3D&v%5Bassigned_to_id%5D%5B%5D=me"
        );
    }
}
