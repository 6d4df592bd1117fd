use super::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// A named collection of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (e.g., "website-redesign")
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown on the project card
    #[serde(default)]
    pub description: String,
    /// Tasks owned by this project, unique by id
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Per-status task counts shown on a project card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl StatusCounts {
    /// Count for a single status
    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Completed => self.completed,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::NotStarted => self.not_started,
        }
    }
}

impl Project {
    /// Find a task by its ID
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove a task and return it
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Tally tasks by status
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for task in &self.tasks {
            match task.status {
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::NotStarted => counts.not_started += 1,
            }
        }
        counts
    }

    /// Unique assignees of this project, sorted
    pub fn assignees(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tasks.iter().map(|t| t.assignee.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}
