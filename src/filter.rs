//! Filter stage between the project's task collection and the views
//!
//! Search, status and assignee filters are applied in sequence and combined
//! with AND. The result is what both the list and the Gantt view display.

use crate::project::{Task, TaskStatus};

/// Active filter settings for the selected project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive title substring; empty matches everything
    pub search: String,
    /// `None` means "all statuses"
    pub status: Option<TaskStatus>,
    /// `None` means "all assignees"
    pub assignee: Option<String>,
}

impl TaskFilter {
    /// Apply every filter to `tasks`, preserving order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut visible = tasks.to_vec();
        apply_search_filter(&mut visible, &self.search);
        if let Some(status) = self.status {
            apply_status_filter(&mut visible, status);
        }
        if let Some(ref assignee) = self.assignee {
            apply_assignee_filter(&mut visible, assignee);
        }
        visible
    }
}

/// Apply title search (case-insensitive)
///
/// # Arguments
/// * `tasks` - Tasks to filter in place
/// * `query` - Substring to search for; empty keeps everything
pub fn apply_search_filter(tasks: &mut Vec<Task>, query: &str) {
    let query_lower = query.to_lowercase();
    tasks.retain(|task| task.title.to_lowercase().contains(&query_lower));
}

/// Apply status filtering
pub fn apply_status_filter(tasks: &mut Vec<Task>, status: TaskStatus) {
    tasks.retain(|task| task.status == status);
}

/// Apply assignee filtering (exact name match)
pub fn apply_assignee_filter(tasks: &mut Vec<Task>, assignee: &str) {
    tasks.retain(|task| task.assignee == assignee);
}
