//! Project selection handlers for the Gantt MCP server

use crate::GanttServerHandler;
use crate::formatting;
use crate::project::WorkspaceError;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Dashboard: every project as a card with status counts.
    pub async fn handle_list_projects(&self) -> McpResult<String> {
        let data = self.workspace();
        Ok(formatting::format_project_cards(data.projects()))
    }

    /// Open a project and show it in the active view.
    pub async fn handle_select_project(&self, id: String) -> McpResult<String> {
        let id = id.trim();
        let mut data = self.workspace();

        let selected = data
            .select_project(id)
            .map(formatting::format_project_header);
        let header = match selected {
            Ok(header) => header,
            Err(WorkspaceError::ProjectNotFound(_)) => {
                let error_msg = validation::format_invalid_project_error(id, data.projects());
                drop(data);
                bail_public!(_, "{}", error_msg);
            }
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        log::info!("event=project_selected project={}", id);

        let view = self.render_current_view(&mut data)?;
        Ok(format!("{}\n{}", header, view))
    }

    /// Close the project and reset search, status and assignee filters.
    pub async fn handle_back_to_projects(&self) -> McpResult<String> {
        let mut data = self.workspace();
        data.back_to_projects();
        log::info!("event=project_closed");
        Ok(formatting::format_project_cards(data.projects()))
    }
}
