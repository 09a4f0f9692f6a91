//! Logged-hours record.

use crate::clock;
use crate::model::member::MemberId;
use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a time entry.
pub type TimeEntryId = Uuid;

/// Hours a member logged against a task on one date.
///
/// # Invariants
/// - Owned by its task: deleting the task deletes its entries.
/// - `member_id` may outlive the member it references; member deletion does
///   not touch time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub task_id: TaskId,
    pub member_id: MemberId,
    pub hours: f64,
    /// ISO `YYYY-MM-DD` date string.
    pub date: String,
    pub description: Option<String>,
    pub billable: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl TimeEntry {
    pub fn new(
        task_id: TaskId,
        member_id: MemberId,
        hours: f64,
        date: impl Into<String>,
        description: Option<String>,
        billable: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            member_id,
            hours,
            date: date.into(),
            description,
            billable,
            created_at: clock::now_rfc3339(),
        }
    }
}
