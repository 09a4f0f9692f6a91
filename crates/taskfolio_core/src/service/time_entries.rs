//! Time entry mutations. Purely additive bookkeeping: no cascades and no
//! reconciliation are triggered from here.

use crate::model::member::MemberId;
use crate::model::task::TaskId;
use crate::model::time_entry::{TimeEntry, TimeEntryId};
use crate::service::{ServiceResult, WorkspaceService};
use crate::snapshot::SnapshotStore;

/// Field-wise update for [`TimeEntry`].
///
/// `None` leaves a field unchanged; `Some(None)` clears the description.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryPatch {
    pub task_id: Option<TaskId>,
    pub member_id: Option<MemberId>,
    pub hours: Option<f64>,
    pub date: Option<String>,
    pub description: Option<Option<String>>,
    pub billable: Option<bool>,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    /// Logs hours against a task; an omitted `billable` defaults to true.
    pub fn add_time_entry(
        &mut self,
        task_id: TaskId,
        member_id: MemberId,
        hours: f64,
        date: impl Into<String>,
        description: Option<String>,
        billable: Option<bool>,
    ) -> ServiceResult<TimeEntry> {
        let entry = TimeEntry::new(
            task_id,
            member_id,
            hours,
            date,
            description,
            billable.unwrap_or(true),
        );
        self.workspace_mut().time_entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Merges `patch` into the entry; silent no-op for an unknown id.
    pub fn update_time_entry(
        &mut self,
        id: TimeEntryId,
        patch: TimeEntryPatch,
    ) -> ServiceResult<()> {
        if let Some(entry) = self.workspace_mut().time_entry_mut(id) {
            if let Some(task_id) = patch.task_id {
                entry.task_id = task_id;
            }
            if let Some(member_id) = patch.member_id {
                entry.member_id = member_id;
            }
            if let Some(hours) = patch.hours {
                entry.hours = hours;
            }
            if let Some(date) = patch.date {
                entry.date = date;
            }
            if let Some(description) = patch.description {
                entry.description = description;
            }
            if let Some(billable) = patch.billable {
                entry.billable = billable;
            }
        }
        self.persist()
    }

    pub fn delete_time_entry(&mut self, id: TimeEntryId) -> ServiceResult<()> {
        self.workspace_mut().time_entries.retain(|entry| entry.id != id);
        self.persist()
    }
}
