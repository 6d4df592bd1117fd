//! Filter and list view handlers for the Gantt MCP server

use crate::GanttServerHandler;
use crate::project::ViewMode;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Update the filter stage; omitted parameters keep their current value.
    pub async fn handle_set_filter(
        &self,
        search: Option<String>,
        status: Option<String>,
        assignee: Option<String>,
    ) -> McpResult<String> {
        // Parse before touching state so a bad status changes nothing
        let status_filter = status
            .as_deref()
            .map(validation::parse_status_filter)
            .transpose()?;

        let mut data = self.workspace();
        if data.selected_project().is_none() {
            drop(data);
            bail_public!(_, "No project selected. Use select_project() first.");
        }

        if let Some(query) = search {
            data.filter.search = query;
        }
        if let Some(status) = status_filter {
            data.filter.status = status;
        }
        if let Some(ref name) = assignee {
            data.filter.assignee = validation::parse_assignee_filter(name);
        }
        log::debug!("event=filter_changed filter={:?}", data.filter);

        let filter = &data.filter;
        let summary = format!(
            "Filters: search=\"{}\", status={}, assignee={}\n\n",
            filter.search,
            filter.status.map_or(validation::ALL, |s| s.as_str()),
            filter.assignee.as_deref().unwrap_or(validation::ALL)
        );
        let view = self.render_current_view(&mut data)?;
        Ok(format!("{}{}", summary, view))
    }

    /// Unique assignees of the open project, for the assignee filter.
    pub async fn handle_list_assignees(&self) -> McpResult<String> {
        let data = self.workspace();
        if data.selected_project().is_none() {
            drop(data);
            bail_public!(_, "No project selected. Use select_project() first.");
        }
        let assignees = data.assignees();
        if assignees.is_empty() {
            return Ok("No assignees found".to_string());
        }
        Ok(format!("Assignees: {}", assignees.join(", ")))
    }

    /// List view of the filtered tasks; also switches the active view to list.
    pub async fn handle_list_tasks(&self) -> McpResult<String> {
        let mut data = self.workspace();
        data.view_mode = ViewMode::List;
        self.render_current_view(&mut data)
    }
}
