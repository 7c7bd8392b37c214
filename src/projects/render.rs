//! Plain-text rendering of the dashboard for terminal output.

use super::Project;
use crate::forms::DATE_FORMAT;
use std::fmt::Write;

pub const BRAND: &str = "DevConnect";
pub const EMPTY_LIST: &str = "No projects found.";

/// Renders one project card.
#[must_use]
pub fn project_card(project: &Project) -> String {
    let deadline = project.deadline_date().map_or_else(
        || "Not set".to_string(),
        |date| date.format(DATE_FORMAT).to_string(),
    );
    let tags = if project.tags.is_empty() {
        "-".to_string()
    } else {
        project
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut card = String::new();
    let _ = writeln!(card, "{} ({})", project.title, project.id);
    let _ = writeln!(card, "  {}", project.description);
    let _ = writeln!(card, "  Status:   {}", project.status_label());
    let _ = writeln!(card, "  Deadline: {deadline}");
    let _ = write!(card, "  Tags:     {tags}");
    card
}

/// Renders the visible projects, or the empty-list notice.
#[must_use]
pub fn project_list(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return EMPTY_LIST.to_string();
    }

    projects
        .iter()
        .map(|project| project_card(project))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Dashboard header line.
#[must_use]
pub fn header(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{BRAND} Dashboard: {total} project(s)")
    } else {
        format!("{BRAND} Dashboard: {visible} of {total} project(s)")
    }
}
