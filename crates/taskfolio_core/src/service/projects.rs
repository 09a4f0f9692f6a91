//! Project mutations.

use crate::model::client::ClientId;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::task::TaskId;
use crate::service::{ServiceResult, WorkspaceService};
use crate::snapshot::SnapshotStore;

/// Field-wise update for [`Project`].
///
/// `None` leaves a field unchanged; for nullable fields the inner option is
/// the new value, so `Some(None)` clears the field.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    /// Manual status override; wins until the next task mutation
    /// re-triggers reconciliation.
    pub status: Option<ProjectStatus>,
    /// Manual progress override, same escape-hatch semantics as `status`.
    pub progress: Option<u8>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<String>>,
    pub client_id: Option<Option<ClientId>>,
    pub budget: Option<Option<f64>>,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    /// Creates a project in `NotStarted` state with zero progress.
    pub fn add_project(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        due_date: Option<String>,
        client_id: Option<ClientId>,
        budget: Option<f64>,
    ) -> ServiceResult<Project> {
        let project = Project::new(name, description, due_date, client_id, budget);
        self.workspace_mut().projects.push(project.clone());
        self.persist()?;
        Ok(project)
    }

    /// Merges `patch` into the project; silent no-op for an unknown id.
    pub fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> ServiceResult<()> {
        if let Some(project) = self.workspace_mut().project_mut(id) {
            if let Some(name) = patch.name {
                project.name = name;
            }
            if let Some(status) = patch.status {
                project.status = status;
            }
            if let Some(progress) = patch.progress {
                project.progress = progress;
            }
            if let Some(description) = patch.description {
                project.description = description;
            }
            if let Some(due_date) = patch.due_date {
                project.due_date = due_date;
            }
            if let Some(client_id) = patch.client_id {
                project.client_id = client_id;
            }
            if let Some(budget) = patch.budget {
                project.budget = budget;
            }
        }
        self.persist()
    }

    /// Deletes the project together with its tasks and their time entries.
    pub fn delete_project(&mut self, id: ProjectId) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        workspace.projects.retain(|project| project.id != id);

        let doomed_tasks: Vec<TaskId> = workspace
            .tasks
            .iter()
            .filter(|task| task.project_id == id)
            .map(|task| task.id)
            .collect();
        workspace.tasks.retain(|task| task.project_id != id);
        workspace
            .time_entries
            .retain(|entry| !doomed_tasks.contains(&entry.task_id));

        self.persist()
    }
}
