//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use gantt_mcp::{GanttServerHandler, Project, Task, TaskStatus, Workspace};

/// Build a date, panicking on invalid input
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test task with minimal fields
pub fn create_test_task(id: &str, start: NaiveDate, end: NaiveDate) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        status: TaskStatus::NotStarted,
        assignee: String::new(),
        start_date: start,
        end_date: end,
        dependencies: Vec::new(),
        project_id: "website".to_string(),
    }
}

/// Create a test task with all fields
pub fn create_full_test_task(
    id: &str,
    title: &str,
    status: TaskStatus,
    assignee: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Task {
    Task {
        title: title.to_string(),
        status,
        assignee: assignee.to_string(),
        ..create_test_task(id, start, end)
    }
}

/// Two projects; "website" has three tasks across all statuses
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "website".to_string(),
            name: "Website Redesign".to_string(),
            description: "Refresh the marketing site".to_string(),
            tasks: vec![
                create_full_test_task(
                    "task-1",
                    "Wireframes",
                    TaskStatus::Completed,
                    "Sarah Chen",
                    date(2024, 1, 1),
                    date(2024, 1, 10),
                ),
                create_full_test_task(
                    "task-2",
                    "Visual design",
                    TaskStatus::InProgress,
                    "Emma Wilson",
                    date(2024, 1, 5),
                    date(2024, 1, 20),
                ),
                create_full_test_task(
                    "task-3",
                    "Launch checklist",
                    TaskStatus::NotStarted,
                    "Sarah Chen",
                    date(2024, 1, 18),
                    date(2024, 1, 19),
                ),
            ],
        },
        Project {
            id: "mobile".to_string(),
            name: "Mobile App".to_string(),
            description: String::new(),
            tasks: Vec::new(),
        },
    ]
}

/// Create a test handler over the sample projects
pub fn get_test_handler() -> GanttServerHandler {
    GanttServerHandler::with_workspace(Workspace::with_projects(sample_projects()), 84)
}

/// Extract task ID from add_task() response message
/// Response format: "Task created successfully with ID: <id> (project: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}
