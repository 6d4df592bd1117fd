//! Gantt view handlers for the Gantt MCP server

use crate::GanttServerHandler;
use crate::formatting;
use crate::project::{ViewMode, Workspace, local_date_today};
use crate::render;
use crate::timeline;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Render whichever view is active for the open project.
    ///
    /// The Gantt branch recomputes bounds, grid, layouts and today marker
    /// from scratch, then lets the view state settle its scroll position at
    /// the window width the client last asked for.
    pub(crate) fn render_current_view(&self, data: &mut Workspace) -> McpResult<String> {
        let tasks = match data.visible_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };
        if tasks.is_empty() {
            // Nothing is charted, so the next chart starts over
            data.gantt.rewind();
            return Ok(formatting::NO_MATCHING_TASKS.to_string());
        }

        match data.view_mode {
            ViewMode::List => Ok(formatting::format_task_list(&tasks)),
            ViewMode::Gantt => {
                let today = local_date_today();
                let computed = timeline::compute_timeline(&tasks, data.zoom, today);
                let viewport = data.gantt.frame(&computed, self.viewport_width);
                Ok(render::render_gantt(&tasks, &computed, today, viewport))
            }
        }
    }

    /// Gantt view of the filtered tasks, optionally switching zoom first.
    pub async fn handle_gantt(
        &self,
        zoom: Option<String>,
        viewport_width: Option<u32>,
    ) -> McpResult<String> {
        let zoom = zoom.as_deref().map(validation::parse_zoom).transpose()?;

        let mut data = self.workspace();
        if let Some(zoom) = zoom
            && zoom != data.zoom
        {
            log::info!("event=zoom_changed from={} to={}", data.zoom, zoom);
            data.zoom = zoom;
        }
        if data.view_mode == ViewMode::List {
            data.gantt.rewind();
        }
        data.view_mode = ViewMode::Gantt;
        if let Some(width) = viewport_width {
            data.gantt.set_viewport_width(width as usize);
        }

        self.render_current_view(&mut data)
    }

    /// Manually scroll the Gantt view by `delta` characters.
    pub async fn handle_scroll(&self, delta: i64) -> McpResult<String> {
        let mut data = self.workspace();
        if data.view_mode != ViewMode::Gantt {
            drop(data);
            bail_public!(_, "Scrolling applies to the gantt view. Use gantt() first.");
        }
        data.gantt.scroll_by(delta);
        self.render_current_view(&mut data)
    }
}
