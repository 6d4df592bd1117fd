//! Gantt MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for project task
//! tracking. A client opens a project, filters its tasks, edits them, and views
//! them as a list or as a text Gantt timeline.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `GanttServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `project` module - Projects, tasks and the in-memory workspace
//! - **Layout Layer**: `timeline` module - Pure Gantt layout engine, painted by `render`
//!
//! State lives only in memory. An optional TOML seed file provides the initial
//! projects and is never written back.
//!
//! # Example
//!
//! ```no_run
//! use gantt_mcp::GanttServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = GanttServerHandler::new(Some("projects.toml"), 84)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod filter;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod project;
pub mod render;
pub mod seed;
pub mod timeline;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use project::{Project, Task, TaskStatus, Workspace};
pub use seed::Seed;
pub use timeline::{Timeline, Zoom, compute_timeline};

/// MCP Server handler for project task tracking
///
/// Owns the session workspace. Each tool call locks it once, applies at most
/// one state change, and derives any view from the result.
pub struct GanttServerHandler {
    pub(crate) data: Mutex<Workspace>,
    pub(crate) viewport_width: usize,
}

impl GanttServerHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `seed_path` - Optional TOML file with the initial projects
    /// * `viewport_width` - Default visible width of the Gantt track, in characters
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use gantt_mcp::GanttServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = GanttServerHandler::new(Some("projects.toml"), 84)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(seed_path: Option<&str>, viewport_width: usize) -> Result<Self> {
        let projects = match seed_path {
            Some(path) => Seed::new(path).load()?,
            None => Vec::new(),
        };
        Ok(Self::with_workspace(
            Workspace::with_projects(projects),
            viewport_width,
        ))
    }

    /// Create a handler around an existing workspace
    pub fn with_workspace(workspace: Workspace, viewport_width: usize) -> Self {
        Self {
            data: Mutex::new(workspace),
            viewport_width: viewport_width.max(1),
        }
    }

    /// Lock the workspace
    ///
    /// A panic in a previous tool call cannot leave the workspace half
    /// mutated (every mutation is a single assignment), so poisoning is
    /// ignored.
    pub(crate) fn workspace(&self) -> MutexGuard<'_, Workspace> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Project task tracker with a Gantt timeline.
///
/// Workflow: list_projects → select_project → (set_filter) → gantt or list_tasks.
/// Tasks belong to the selected project; add_task/update_task/delete_task act on it.
///
/// Key concepts:
/// - **status**: not-started / in-progress / completed
/// - **dates**: YYYY-MM-DD, inclusive on both ends
/// - **zoom**: "day" (one column per day) or "week" (one column per 7 days)
/// - **today marker**: │ column in the Gantt view, shown only when today is on the timeline
#[mcp_server]
impl McpServer for GanttServerHandler {
    /// **Dashboard**: List all projects with task counts per status.
    #[tool]
    async fn list_projects(&self) -> McpResult<String> {
        self.handle_list_projects().await
    }

    /// **Open project**: Select a project and show its tasks in the active view (gantt by default).
    #[tool]
    async fn select_project(
        &self,
        /// Project ID (see list_projects)
        id: String,
    ) -> McpResult<String> {
        self.handle_select_project(id).await
    }

    /// **Close project**: Return to the dashboard. Clears search, status and assignee filters.
    #[tool]
    async fn back_to_projects(&self) -> McpResult<String> {
        self.handle_back_to_projects().await
    }

    /// **Filter**: Narrow the visible tasks. Omitted parameters keep their value; "all" clears status/assignee.
    #[tool]
    async fn set_filter(
        &self,
        /// Title search, case-insensitive; "" clears (optional)
        search: Option<String>,
        /// Status: all/not-started/in-progress/completed (optional)
        status: Option<String>,
        /// Assignee name or "all" (optional)
        assignee: Option<String>,
    ) -> McpResult<String> {
        self.handle_set_filter(search, status, assignee).await
    }

    /// **Assignees**: Unique assignees in the selected project, for the assignee filter.
    #[tool]
    async fn list_assignees(&self) -> McpResult<String> {
        self.handle_list_assignees().await
    }

    /// **List view**: Filtered tasks of the selected project, one per line.
    #[tool]
    async fn list_tasks(&self) -> McpResult<String> {
        self.handle_list_tasks().await
    }

    /// **Gantt view**: Timeline of the filtered tasks. Scrolls to today when the today marker moves.
    #[tool]
    async fn gantt(
        &self,
        /// Zoom: day/week (optional, keeps current)
        zoom: Option<String>,
        /// Visible track width in characters (optional)
        viewport_width: Option<u32>,
    ) -> McpResult<String> {
        self.handle_gantt(zoom, viewport_width).await
    }

    /// **Scroll**: Move the Gantt viewport horizontally. Negative = earlier, positive = later.
    #[tool]
    async fn scroll(
        &self,
        /// Characters to scroll by
        delta: i64,
    ) -> McpResult<String> {
        self.handle_scroll(delta).await
    }

    /// **Open task**: Show every field of a task, e.g. before editing it.
    #[tool]
    async fn open_task(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_open_task(id).await
    }

    /// **Create task**: Add a task to the selected project. End before start is allowed and drawn as one day.
    #[tool]
    async fn add_task(
        &self,
        /// Task title
        title: String,
        /// Start date YYYY-MM-DD
        start_date: String,
        /// End date YYYY-MM-DD (inclusive)
        end_date: String,
        /// Status: not-started/in-progress/completed (optional, default not-started)
        status: Option<String>,
        /// Assignee name (optional)
        assignee: Option<String>,
        /// IDs of tasks this one depends on (optional, stored only)
        dependencies: Option<Vec<String>>,
    ) -> McpResult<String> {
        self.handle_add_task(title, start_date, end_date, status, assignee, dependencies)
            .await
    }

    /// **Edit task**: Update fields of a task in the selected project. Omitted fields are unchanged.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn update_task(
        &self,
        /// Task ID
        id: String,
        /// New title (optional)
        title: Option<String>,
        /// New status: not-started/in-progress/completed (optional)
        status: Option<String>,
        /// New assignee (optional)
        assignee: Option<String>,
        /// New start date YYYY-MM-DD (optional)
        start_date: Option<String>,
        /// New end date YYYY-MM-DD (optional)
        end_date: Option<String>,
        /// Replacement dependency list (optional)
        dependencies: Option<Vec<String>>,
    ) -> McpResult<String> {
        self.handle_update_task(id, title, status, assignee, start_date, end_date, dependencies)
            .await
    }

    /// **Delete task**: Remove a task from the selected project.
    #[tool]
    async fn delete_task(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }
}
