//! Task create/update/delete handlers for the Gantt MCP server

use crate::GanttServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Task-selected callback: full record of one task, ready for editing.
    pub async fn handle_open_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let data = self.workspace();
        let details = data.find_task(&id).map(formatting::format_task_details);
        drop(data);
        match details {
            Ok(details) => Ok(details),
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        }
    }

    /// Create a task in the open project from form fields.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_add_task(
        &self,
        title: String,
        start_date: String,
        end_date: String,
        status: Option<String>,
        assignee: Option<String>,
        dependencies: Option<Vec<String>>,
    ) -> McpResult<String> {
        let draft = validation::parse_task_draft(
            Some(title),
            status,
            assignee,
            Some(start_date),
            Some(end_date),
            dependencies,
        )?;

        let mut data = self.workspace();
        let task = match data.create_task(draft) {
            Ok(task) => task,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        drop(data);

        log::info!(
            "event=task_created project={} task={} inverted={}",
            task.project_id,
            task.id,
            task.is_inverted()
        );
        Ok(format!(
            "Task created successfully with ID: {} (project: {})",
            task.id, task.project_id
        ))
    }

    /// Merge supplied form fields into an existing task.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_update_task(
        &self,
        id: String,
        title: Option<String>,
        status: Option<String>,
        assignee: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        dependencies: Option<Vec<String>>,
    ) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let draft = validation::parse_task_draft(
            title,
            status,
            assignee,
            start_date,
            end_date,
            dependencies,
        )?;

        let mut data = self.workspace();
        let task = match data.update_task(&id, draft) {
            Ok(task) => task,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        drop(data);

        log::info!("event=task_updated project={} task={}", task.project_id, task.id);
        Ok(format!("Task {} updated successfully", task.id))
    }

    /// Remove a task from the open project.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let mut data = self.workspace();
        let task = match data.delete_task(&id) {
            Ok(task) => task,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        drop(data);

        log::info!("event=task_deleted project={} task={}", task.project_id, task.id);
        Ok(format!("Task {} deleted successfully", task.id))
    }
}
