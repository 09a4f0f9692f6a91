//! Project status reconciliation.
//!
//! The rule set that keeps a project's `status` and `progress` consistent
//! with its tasks:
//!
//! - first task added to a `NotStarted` project moves it to `InProgress`;
//! - a toggle that leaves every task complete forces `Completed`/100;
//! - a toggle that breaks an all-complete set moves `Completed` back to
//!   `InProgress` with recomputed progress;
//! - task adds and deletes recompute progress without any further status
//!   transition.
//!
//! Direct project updates bypass these rules by design; a manual edit holds
//! until the next task mutation lands here again.

use crate::metrics::project::project_progress;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::model::workspace::Workspace;

/// Applies the add-task rule: `NotStarted` parents start, progress refreshes.
pub(crate) fn on_task_added(workspace: &mut Workspace, project_id: ProjectId) {
    let progress = project_progress(workspace, project_id);
    if let Some(project) = workspace.project_mut(project_id) {
        if project.status == ProjectStatus::NotStarted {
            project.status = ProjectStatus::InProgress;
        }
        project.progress = progress;
    }
}

/// Applies the toggle rule: completion forces `Completed`, regression from
/// `Completed` reverts to `InProgress`, anything else only refreshes
/// progress.
pub(crate) fn on_task_toggled(workspace: &mut Workspace, project_id: ProjectId) {
    let total = workspace
        .tasks
        .iter()
        .filter(|task| task.project_id == project_id)
        .count();
    let all_complete = total > 0
        && workspace
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .all(|task| task.complete);
    let progress = project_progress(workspace, project_id);

    if let Some(project) = workspace.project_mut(project_id) {
        if all_complete {
            project.status = ProjectStatus::Completed;
            project.progress = 100;
        } else if project.status == ProjectStatus::Completed {
            project.status = ProjectStatus::InProgress;
            project.progress = progress;
        } else {
            project.progress = progress;
        }
    }
}

/// Recomputes stored progress without touching status.
pub(crate) fn refresh_progress(workspace: &mut Workspace, project_id: ProjectId) {
    let progress = project_progress(workspace, project_id);
    if let Some(project) = workspace.project_mut(project_id) {
        project.progress = progress;
    }
}

#[cfg(test)]
mod tests {
    use super::{on_task_added, on_task_toggled, refresh_progress};
    use crate::model::project::{Project, ProjectId, ProjectStatus};
    use crate::model::task::{Priority, Task};
    use crate::model::workspace::Workspace;

    fn workspace_with_project() -> (Workspace, ProjectId) {
        let mut workspace = Workspace::default();
        let project = Project::new("P", None, None, None, None);
        let project_id = project.id;
        workspace.projects.push(project);
        (workspace, project_id)
    }

    fn push_task(workspace: &mut Workspace, project_id: ProjectId, complete: bool) {
        let order = workspace.tasks.len() as i64;
        let mut task = Task::new(
            project_id,
            format!("t{order}"),
            None,
            Priority::default(),
            None,
            order,
        );
        task.complete = complete;
        workspace.tasks.push(task);
    }

    #[test]
    fn first_task_starts_a_not_started_project() {
        let (mut workspace, project_id) = workspace_with_project();
        push_task(&mut workspace, project_id, false);

        on_task_added(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.progress, 0);
    }

    #[test]
    fn adding_a_task_does_not_reopen_a_completed_project() {
        let (mut workspace, project_id) = workspace_with_project();
        workspace.project_mut(project_id).unwrap().status = ProjectStatus::Completed;
        push_task(&mut workspace, project_id, true);
        push_task(&mut workspace, project_id, false);

        on_task_added(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.progress, 50);
    }

    #[test]
    fn toggling_the_last_open_task_completes_the_project() {
        let (mut workspace, project_id) = workspace_with_project();
        workspace.project_mut(project_id).unwrap().status = ProjectStatus::InProgress;
        push_task(&mut workspace, project_id, true);
        push_task(&mut workspace, project_id, true);

        on_task_toggled(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.progress, 100);
    }

    #[test]
    fn reopening_a_task_reverts_completed_to_in_progress() {
        let (mut workspace, project_id) = workspace_with_project();
        workspace.project_mut(project_id).unwrap().status = ProjectStatus::Completed;
        workspace.project_mut(project_id).unwrap().progress = 100;
        push_task(&mut workspace, project_id, true);
        push_task(&mut workspace, project_id, false);

        on_task_toggled(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.progress, 50);
    }

    #[test]
    fn toggle_with_no_tasks_never_completes() {
        let (mut workspace, project_id) = workspace_with_project();
        workspace.project_mut(project_id).unwrap().status = ProjectStatus::InProgress;

        on_task_toggled(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.progress, 0);
    }

    #[test]
    fn refresh_progress_leaves_status_alone() {
        let (mut workspace, project_id) = workspace_with_project();
        workspace.project_mut(project_id).unwrap().status = ProjectStatus::Completed;
        push_task(&mut workspace, project_id, true);
        push_task(&mut workspace, project_id, false);

        refresh_progress(&mut workspace, project_id);

        let project = workspace.project(project_id).unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.progress, 50);
    }

    #[test]
    fn unknown_project_is_a_no_op() {
        let (mut workspace, _) = workspace_with_project();
        let before = workspace.clone();
        on_task_toggled(&mut workspace, uuid::Uuid::new_v4());
        assert_eq!(workspace, before);
    }
}
