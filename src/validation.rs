//! Validation helper functions for the Gantt MCP server
//!
//! Tool parameters arrive as strings. Everything is parsed here, before any
//! value reaches the workspace or the layout engine, so malformed dates never
//! get past this module.

use crate::project::{Project, TaskDraft, TaskStatus};
use crate::timeline::Zoom;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Value meaning "no filter" for status and assignee filters
pub const ALL: &str = "all";

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a task status
pub fn parse_status(status_str: &str) -> McpResult<TaskStatus> {
    status_str.trim().parse::<TaskStatus>().map_err(invalid_params)
}

/// Parse a status filter; `"all"` or empty clears it
///
/// # Returns
/// `None` for no filter, otherwise the status to keep
pub fn parse_status_filter(status_str: &str) -> McpResult<Option<TaskStatus>> {
    let trimmed = status_str.trim();
    if trimmed.is_empty() || trimmed == ALL {
        return Ok(None);
    }
    parse_status(trimmed).map(Some)
}

/// Parse an assignee filter; `"all"` or empty clears it
pub fn parse_assignee_filter(assignee: &str) -> Option<String> {
    let trimmed = assignee.trim();
    if trimmed.is_empty() || trimmed == ALL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a calendar date in YYYY-MM-DD format
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Parse a zoom level
pub fn parse_zoom(zoom_str: &str) -> McpResult<Zoom> {
    zoom_str.trim().parse::<Zoom>().map_err(invalid_params)
}

/// Normalize a task ID by trimming surrounding whitespace
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}

/// Turn raw task form fields into a draft
///
/// Only parses; required-field checks happen when the draft is turned into a
/// task, since an update may legitimately omit every field.
pub fn parse_task_draft(
    title: Option<String>,
    status: Option<String>,
    assignee: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    dependencies: Option<Vec<String>>,
) -> McpResult<TaskDraft> {
    Ok(TaskDraft {
        title: title.map(|t| t.trim().to_string()),
        status: status.as_deref().map(parse_status).transpose()?,
        assignee: assignee.map(|a| a.trim().to_string()),
        start_date: start_date.as_deref().map(parse_date).transpose()?,
        end_date: end_date.as_deref().map(parse_date).transpose()?,
        dependencies: dependencies.map(|deps| {
            deps.iter()
                .map(|d| normalize_task_id(d))
                .filter(|d| !d.is_empty())
                .collect()
        }),
    })
}

/// Format an error message for an unknown project with the available list
///
/// # Arguments
/// * `project_id` - The invalid project ID that was provided
/// * `projects` - Projects to suggest
pub fn format_invalid_project_error(project_id: &str, projects: &[Project]) -> String {
    if projects.is_empty() {
        format!(
            "Project '{}' does not exist. No projects are loaded; start the server with a seed file.",
            project_id
        )
    } else {
        let project_list: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        format!(
            "Project '{}' does not exist.\nAvailable projects: {}",
            project_id,
            project_list.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_all_clears() {
        assert_eq!(parse_status_filter("all").unwrap(), None);
        assert_eq!(parse_status_filter("").unwrap(), None);
        assert_eq!(
            parse_status_filter("in-progress").unwrap(),
            Some(TaskStatus::InProgress)
        );
        assert!(parse_status_filter("blocked").is_err());
    }

    #[test]
    fn test_assignee_filter_all_clears() {
        assert_eq!(parse_assignee_filter(" all "), None);
        assert_eq!(
            parse_assignee_filter("Tom Anderson"),
            Some("Tom Anderson".to_string())
        );
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/02/2024").is_err());
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_draft_parsing_keeps_missing_fields_empty() {
        let draft = parse_task_draft(
            Some(" Launch ".to_string()),
            None,
            None,
            Some("2024-05-01".to_string()),
            None,
            Some(vec![" task-1 ".to_string(), "".to_string()]),
        )
        .unwrap();
        assert_eq!(draft.title.as_deref(), Some("Launch"));
        assert!(draft.status.is_none());
        assert!(draft.end_date.is_none());
        assert_eq!(draft.dependencies, Some(vec!["task-1".to_string()]));
    }

    #[test]
    fn test_invalid_project_error_lists_available() {
        let projects = vec![Project {
            id: "mobile-app".to_string(),
            name: "Mobile App".to_string(),
            description: String::new(),
            tasks: Vec::new(),
        }];
        let msg = format_invalid_project_error("web", &projects);
        assert!(msg.contains("Available projects: mobile-app"));
    }
}
