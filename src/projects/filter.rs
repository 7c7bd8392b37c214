use super::Project;
use chrono::NaiveDate;

/// View filter over the fetched collection. It never touches server state;
/// an unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
}

impl ProjectFilter {
    /// Builds a filter, treating a blank status as unset.
    #[must_use]
    pub fn new(status: Option<&str>, deadline: Option<NaiveDate>) -> Self {
        Self {
            status: status.filter(|s| !s.is_empty()).map(ToString::to_string),
            deadline,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.deadline.is_none()
    }

    /// Resets to "show all".
    pub fn clear(&mut self) {
        self.status = None;
        self.deadline = None;
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let matches_status = self
            .status
            .as_deref()
            .map_or(true, |status| project.status.as_deref() == Some(status));
        let matches_deadline = self
            .deadline
            .map_or(true, |deadline| project.deadline_date() == Some(deadline));

        matches_status && matches_deadline
    }

    /// Returns the matching projects in collection order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|project| self.matches(project)).collect()
    }
}
