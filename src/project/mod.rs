//! Project domain models and the page controller
//!
//! - `task`: task record and status enum
//! - `project`: project record and per-project queries
//! - `form`: task form data and its validation errors
//! - `workspace`: in-memory session state, sole mutator of projects

mod form;
#[allow(clippy::module_inception)]
mod project;
mod task;
mod workspace;

pub use form::{FormError, TaskDraft};
pub use project::{Project, StatusCounts};
pub use task::{Task, TaskStatus, local_date_today};
pub use workspace::{ViewMode, Workspace, WorkspaceError};
