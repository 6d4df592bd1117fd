use crate::project::Project;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of a seed file
///
/// ```toml
/// [[projects]]
/// id = "website"
/// name = "Website Redesign"
///
/// [[projects.tasks]]
/// id = "task-1"
/// title = "Wireframes"
/// status = "in-progress"
/// start_date = "2024-01-01"
/// end_date = "2024-01-05"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Read-only source of the initial project list
///
/// The file is read once at start-up. Nothing is ever written back; edits
/// made during the session live only in memory.
pub struct Seed {
    file_path: PathBuf,
}

impl Seed {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load and check the projects
    ///
    /// Task `project_id` fields are filled in from the enclosing project.
    /// Duplicate project ids or duplicate task ids within a project are
    /// rejected.
    pub fn load(&self) -> Result<Vec<Project>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read seed file {}", self.file_path.display()))?;
        let data: SeedData = toml::from_str(&content)
            .with_context(|| format!("failed to parse seed file {}", self.file_path.display()))?;

        let mut projects = data.projects;
        let mut project_ids = HashSet::new();
        for project in &mut projects {
            if !project_ids.insert(project.id.clone()) {
                bail!("duplicate project id '{}' in seed file", project.id);
            }
            let mut task_ids = HashSet::new();
            for task in &mut project.tasks {
                if !task_ids.insert(task.id.clone()) {
                    bail!(
                        "duplicate task id '{}' in project '{}'",
                        task.id,
                        project.id
                    );
                }
                task.project_id = project.id.clone();
            }
        }

        log::info!(
            "event=seed_loaded path={} projects={} tasks={}",
            self.file_path.display(),
            projects.len(),
            projects.iter().map(|p| p.tasks.len()).sum::<usize>()
        );
        Ok(projects)
    }
}
