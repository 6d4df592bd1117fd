use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task progress status
///
/// The domain is closed: every consumer matches on all three variants.
/// Serialized in kebab-case to match the seed file format (`"not-started"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not begun
    NotStarted,
    /// Work is underway
    InProgress,
    /// Work is finished
    Completed,
}

impl TaskStatus {
    /// All statuses in display order (legend, project cards)
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Completed,
        TaskStatus::InProgress,
        TaskStatus::NotStarted,
    ];

    /// Wire name of the status (`"in-progress"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not-started",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human readable label (`"In Progress"`)
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(TaskStatus::NotStarted),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: not-started, in-progress, completed",
                s
            )),
        }
    }
}

/// A single schedulable unit of work inside a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (e.g., "task-1", "design-review")
    pub id: String,
    /// Display title
    pub title: String,
    /// Current progress status
    pub status: TaskStatus,
    /// Person responsible for the task
    #[serde(default)]
    pub assignee: String,
    /// First day of the task (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the task (inclusive)
    pub end_date: NaiveDate,
    /// IDs of tasks this one depends on. Stored only, never enforced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// ID of the owning project
    #[serde(default)]
    pub project_id: String,
}

impl Task {
    /// Whether the stored range runs backwards (end before start)
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }
}
