//! Task mutations.

use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use crate::model::task::{Priority, Task, TaskId};
use crate::service::{reconcile, ServiceResult, WorkspaceService};
use crate::snapshot::SnapshotStore;

/// Field-wise update for [`Task`].
///
/// `None` leaves a field unchanged; `Some(None)` clears a nullable field.
/// The owning project cannot be changed.
///
/// Updating through a patch deliberately skips status reconciliation, even
/// when `complete` changes; only `toggle_task` re-runs the project state
/// machine.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub complete: Option<bool>,
    pub assignee_id: Option<Option<MemberId>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<String>>,
    pub order: Option<i64>,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    /// Creates a task at the end of the project's display order and starts
    /// a `NotStarted` parent project.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        name: impl Into<String>,
        assignee_id: Option<MemberId>,
        priority: Priority,
        due_date: Option<String>,
    ) -> ServiceResult<Task> {
        let workspace = self.workspace_mut();
        let order = workspace
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .map(|task| task.order)
            .max()
            .map_or(0, |max_order| max_order + 1);

        let task = Task::new(project_id, name, assignee_id, priority, due_date, order);
        workspace.tasks.push(task.clone());
        reconcile::on_task_added(workspace, project_id);

        self.persist()?;
        Ok(task)
    }

    /// Flips completion and reconciles the parent project's status and
    /// progress. Silent no-op for an unknown id.
    pub fn toggle_task(&mut self, id: TaskId) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        let project_id = match workspace.task_mut(id) {
            Some(task) => {
                task.complete = !task.complete;
                Some(task.project_id)
            }
            None => None,
        };
        if let Some(project_id) = project_id {
            reconcile::on_task_toggled(workspace, project_id);
        }
        self.persist()
    }

    /// Deletes the task and its time entries, then refreshes the parent's
    /// progress. Status is left as-is.
    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        let project_id = workspace.task(id).map(|task| task.project_id);

        workspace.tasks.retain(|task| task.id != id);
        workspace.time_entries.retain(|entry| entry.task_id != id);

        if let Some(project_id) = project_id {
            reconcile::refresh_progress(workspace, project_id);
        }
        self.persist()
    }

    /// Merges `patch` into the task; silent no-op for an unknown id.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> ServiceResult<()> {
        if let Some(task) = self.workspace_mut().task_mut(id) {
            if let Some(name) = patch.name {
                task.name = name;
            }
            if let Some(complete) = patch.complete {
                task.complete = complete;
            }
            if let Some(assignee_id) = patch.assignee_id {
                task.assignee_id = assignee_id;
            }
            if let Some(priority) = patch.priority {
                task.priority = priority;
            }
            if let Some(due_date) = patch.due_date {
                task.due_date = due_date;
            }
            if let Some(order) = patch.order {
                task.order = order;
            }
        }
        self.persist()
    }

    /// Rewrites the display order of the project's tasks to match the slice
    /// position of each id. Tasks missing from `ordered_ids` keep their
    /// current order; ids of other projects' tasks are ignored.
    pub fn reorder_tasks(
        &mut self,
        project_id: ProjectId,
        ordered_ids: &[TaskId],
    ) -> ServiceResult<()> {
        let workspace = self.workspace_mut();
        for task in workspace
            .tasks
            .iter_mut()
            .filter(|task| task.project_id == project_id)
        {
            if let Some(position) = ordered_ids.iter().position(|id| *id == task.id) {
                task.order = position as i64;
            }
        }
        self.persist()
    }
}
