//! Formatting helper functions for the Gantt MCP server
//!
//! Text for the project dashboard, the list view and single task details.
//! The Gantt view has its own renderer in `render`.

use crate::project::{Project, Task, TaskStatus};

/// Message shown when the filter stage leaves nothing to display
pub const NO_MATCHING_TASKS: &str = "No tasks found matching your filters.";

/// Format the project dashboard, one card per project
///
/// Each card shows name, description and the non-zero status counts.
pub fn format_project_cards(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }

    let mut result = format!("Your Projects ({}):\n\n", projects.len());
    for project in projects {
        result.push_str(&format!("- [{}] {}\n", project.id, project.name));
        if !project.description.is_empty() {
            result.push_str(&format!("  {}\n", project.description));
        }
        let counts = project.status_counts();
        let badges: Vec<String> = TaskStatus::ALL
            .iter()
            .filter(|s| counts.get(**s) > 0)
            .map(|s| format!("{} {}", counts.get(*s), s.label()))
            .collect();
        if !badges.is_empty() {
            result.push_str(&format!("  {}\n", badges.join(" | ")));
        }
    }
    result
}

/// Format the header shown when a project is opened
pub fn format_project_header(project: &Project) -> String {
    let mut result = format!("{} [{}]\n", project.name, project.id);
    if !project.description.is_empty() {
        result.push_str(&format!("{}\n", project.description));
    }
    result.push_str(&format!("{} task(s)\n", project.tasks.len()));
    result
}

/// Format the list view
///
/// # Arguments
/// * `tasks` - Visible tasks, in display order
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_MATCHING_TASKS.to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} ({})\n",
            task.id,
            task.title,
            task.status.label()
        ));
        let assignee = if task.assignee.is_empty() {
            "Unassigned"
        } else {
            task.assignee.as_str()
        };
        result.push_str(&format!(
            "  {} • {} → {}\n",
            assignee, task.start_date, task.end_date
        ));
    }
    result
}

/// Format every field of a task, as an edit form would be pre-filled
pub fn format_task_details(task: &Task) -> String {
    let mut result = format!("Task [{}]\n", task.id);
    result.push_str(&format!("  Title: {}\n", task.title));
    result.push_str(&format!("  Status: {}\n", task.status));
    result.push_str(&format!("  Assignee: {}\n", task.assignee));
    result.push_str(&format!("  Start date: {}\n", task.start_date));
    result.push_str(&format!("  End date: {}\n", task.end_date));
    if !task.dependencies.is_empty() {
        result.push_str(&format!("  Dependencies: {}\n", task.dependencies.join(", ")));
    }
    result.push_str(&format!("  Project: {}\n", task.project_id));
    result
}
