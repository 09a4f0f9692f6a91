//! Overdue and upcoming task views.
//!
//! All comparisons are lexicographic on ISO `YYYY-MM-DD` strings; completed
//! tasks never appear regardless of their due date.

use crate::clock;
use crate::model::task::Task;
use crate::model::workspace::Workspace;

/// Incomplete tasks due strictly before `today`.
pub fn overdue_tasks_as_of<'ws>(workspace: &'ws Workspace, today: &str) -> Vec<&'ws Task> {
    workspace
        .tasks
        .iter()
        .filter(|task| !task.complete)
        .filter(|task| {
            task.due_date
                .as_deref()
                .map_or(false, |due| due < today)
        })
        .collect()
}

/// Incomplete tasks due strictly before today's date.
pub fn overdue_tasks(workspace: &Workspace) -> Vec<&Task> {
    overdue_tasks_as_of(workspace, &clock::today())
}

/// Incomplete tasks due within `[today, horizon]`, both bounds inclusive.
pub fn upcoming_tasks_within<'ws>(
    workspace: &'ws Workspace,
    today: &str,
    horizon: &str,
) -> Vec<&'ws Task> {
    workspace
        .tasks
        .iter()
        .filter(|task| !task.complete)
        .filter(|task| {
            task.due_date
                .as_deref()
                .map_or(false, |due| due >= today && due <= horizon)
        })
        .collect()
}

/// Incomplete tasks due within the next `days` days, today included.
pub fn upcoming_tasks(workspace: &Workspace, days: u32) -> Vec<&Task> {
    upcoming_tasks_within(
        workspace,
        &clock::today(),
        &clock::today_plus(i64::from(days)),
    )
}
