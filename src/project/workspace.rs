use super::form::{FormError, TaskDraft};
use super::project::Project;
use super::task::Task;
use crate::filter::TaskFilter;
use crate::render::GanttViewState;
use crate::timeline::Zoom;
use thiserror::Error;

/// Errors raised by workspace mutations and lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("No project selected. Use select_project() first.")]
    NoProjectSelected,
    #[error("Project '{0}' does not exist. Use list_projects() to see available projects.")]
    ProjectNotFound(String),
    #[error("Task '{0}' does not exist in the selected project. Use list_tasks() to see available tasks.")]
    TaskNotFound(String),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Which view the selected project is shown in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Gantt,
    List,
}

/// Session state of the page: the project collection plus UI selections
///
/// This is the only owner and mutator of projects and tasks. Everything lives
/// in memory and is dropped with the process.
#[derive(Debug, Default)]
pub struct Workspace {
    /// Projects in display order
    pub(crate) projects: Vec<Project>,

    /// ID of the open project. Stored as an id rather than a copy so edits are
    /// visible immediately.
    selected: Option<String>,

    /// Active filter for the open project
    pub filter: TaskFilter,

    /// Gantt zoom level
    pub zoom: Zoom,

    /// Active view tab
    pub view_mode: ViewMode,

    /// Gantt scroll state
    pub gantt: GanttViewState,

    /// Counter for generating unique task IDs
    task_counter: u32,
}

impl Workspace {
    /// Create a workspace from an initial project list
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    /// All projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by its ID
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The open project, if any
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_deref().and_then(|id| self.project(id))
    }

    fn selected_project_mut(&mut self) -> Result<&mut Project, WorkspaceError> {
        let id = self
            .selected
            .as_deref()
            .ok_or(WorkspaceError::NoProjectSelected)?;
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| WorkspaceError::ProjectNotFound(id.to_string()))
    }

    /// Open a project; resets the Gantt view for the new task set
    pub fn select_project(&mut self, id: &str) -> Result<&Project, WorkspaceError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| WorkspaceError::ProjectNotFound(id.to_string()))?;
        self.selected = Some(id.to_string());
        self.zoom = Zoom::default();
        self.gantt.rewind();
        Ok(&self.projects[index])
    }

    /// Close the open project and clear every filter
    pub fn back_to_projects(&mut self) {
        self.selected = None;
        self.filter = TaskFilter::default();
        self.zoom = Zoom::default();
        self.view_mode = ViewMode::default();
        self.gantt.reset();
    }

    /// Unique, sorted assignees of the open project
    pub fn assignees(&self) -> Vec<String> {
        self.selected_project()
            .map(Project::assignees)
            .unwrap_or_default()
    }

    /// Tasks of the open project that pass the active filter
    pub fn visible_tasks(&self) -> Result<Vec<Task>, WorkspaceError> {
        let project = self
            .selected_project()
            .ok_or(WorkspaceError::NoProjectSelected)?;
        Ok(self.filter.apply(&project.tasks))
    }

    /// Look up a task of the open project (click-to-edit target)
    pub fn find_task(&self, id: &str) -> Result<&Task, WorkspaceError> {
        let project = self
            .selected_project()
            .ok_or(WorkspaceError::NoProjectSelected)?;
        project
            .find_task(id)
            .ok_or_else(|| WorkspaceError::TaskNotFound(id.to_string()))
    }

    /// Generate a task ID not used by any project
    fn generate_task_id(&mut self) -> String {
        loop {
            self.task_counter += 1;
            let id = format!("task-{}", self.task_counter);
            if !self
                .projects
                .iter()
                .any(|p| p.find_task(&id).is_some())
            {
                return id;
            }
        }
    }

    /// Create a task in the open project
    ///
    /// # Returns
    /// The stored task, with its generated id
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<Task, WorkspaceError> {
        let project_id = self
            .selected_project()
            .map(|p| p.id.clone())
            .ok_or(WorkspaceError::NoProjectSelected)?;
        let id = self.generate_task_id();
        let task = draft.into_task(id, project_id)?;
        self.selected_project_mut()?.tasks.push(task.clone());
        Ok(task)
    }

    /// Merge form fields into an existing task of the open project
    pub fn update_task(&mut self, id: &str, draft: TaskDraft) -> Result<Task, WorkspaceError> {
        let project = self.selected_project_mut()?;
        let task = project
            .find_task_mut(id)
            .ok_or_else(|| WorkspaceError::TaskNotFound(id.to_string()))?;
        let mut updated = task.clone();
        draft.apply_to(&mut updated)?;
        *task = updated.clone();
        Ok(updated)
    }

    /// Remove a task from the open project
    pub fn delete_task(&mut self, id: &str) -> Result<Task, WorkspaceError> {
        self.selected_project_mut()?
            .remove_task(id)
            .ok_or_else(|| WorkspaceError::TaskNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::TaskStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: Some(title.to_string()),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 1, 5)),
            ..Default::default()
        }
    }

    fn workspace() -> Workspace {
        Workspace::with_projects(vec![Project {
            id: "web".to_string(),
            name: "Website".to_string(),
            description: String::new(),
            tasks: Vec::new(),
        }])
    }

    #[test]
    fn test_mutations_require_selection() {
        let mut ws = workspace();
        assert_eq!(
            ws.create_task(draft("x")),
            Err(WorkspaceError::NoProjectSelected)
        );
        assert_eq!(ws.visible_tasks(), Err(WorkspaceError::NoProjectSelected));
    }

    #[test]
    fn test_generated_ids_skip_existing() {
        let mut ws = workspace();
        ws.select_project("web").unwrap();
        ws.projects[0].tasks.push(
            draft("seeded")
                .into_task("task-1".to_string(), "web".to_string())
                .unwrap(),
        );
        let created = ws.create_task(draft("new")).unwrap();
        assert_eq!(created.id, "task-2");
        assert_eq!(created.project_id, "web");
    }

    #[test]
    fn test_failed_update_leaves_task_untouched() {
        let mut ws = workspace();
        ws.select_project("web").unwrap();
        let created = ws.create_task(draft("keep")).unwrap();
        let result = ws.update_task(
            &created.id,
            TaskDraft {
                status: Some(TaskStatus::Completed),
                title: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(WorkspaceError::Form(FormError::MissingTitle)));
        assert_eq!(ws.find_task(&created.id).unwrap().status, TaskStatus::NotStarted);
    }

    #[test]
    fn test_back_to_projects_clears_filters() {
        let mut ws = workspace();
        ws.select_project("web").unwrap();
        ws.filter.search = "abc".to_string();
        ws.zoom = Zoom::Week;
        ws.back_to_projects();
        assert!(ws.selected_project().is_none());
        assert_eq!(ws.filter, TaskFilter::default());
        assert_eq!(ws.zoom, Zoom::Day);
    }
}
