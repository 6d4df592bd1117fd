use super::task::{Task, TaskStatus};
use chrono::NaiveDate;
use thiserror::Error;

/// Problems with submitted task form data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Task title is required")]
    MissingTitle,
    #[error("Start date is required (YYYY-MM-DD)")]
    MissingStartDate,
    #[error("End date is required (YYYY-MM-DD)")]
    MissingEndDate,
}

/// Parsed task form fields; `None` means "not supplied"
///
/// Creation requires title and both dates. Updates merge only the supplied
/// fields into the existing task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub dependencies: Option<Vec<String>>,
}

impl TaskDraft {
    /// Build a new task from the draft
    ///
    /// Status defaults to not-started and assignee to empty. An end date
    /// before the start date is accepted as-is.
    pub fn into_task(self, id: String, project_id: String) -> Result<Task, FormError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(FormError::MissingTitle)?;
        let start_date = self.start_date.ok_or(FormError::MissingStartDate)?;
        let end_date = self.end_date.ok_or(FormError::MissingEndDate)?;

        Ok(Task {
            id,
            title,
            status: self.status.unwrap_or(TaskStatus::NotStarted),
            assignee: self.assignee.unwrap_or_default(),
            start_date,
            end_date,
            dependencies: self.dependencies.unwrap_or_default(),
            project_id,
        })
    }

    /// Merge supplied fields into `task`
    pub fn apply_to(self, task: &mut Task) -> Result<(), FormError> {
        if let Some(title) = self.title {
            if title.trim().is_empty() {
                return Err(FormError::MissingTitle);
            }
            task.title = title;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = assignee;
        }
        if let Some(start) = self.start_date {
            task.start_date = start;
        }
        if let Some(end) = self.end_date {
            task.end_date = end;
        }
        if let Some(deps) = self.dependencies {
            task.dependencies = deps;
        }
        Ok(())
    }
}
