//! Team member record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a team member.
pub type MemberId = Uuid;

/// Hourly rate applied when a member is created without one.
pub const DEFAULT_HOURLY_RATE: f64 = 100.0;

/// A person who can be assigned tasks and log time.
///
/// Members are referenced by `Task::assignee_id` and `TimeEntry::member_id`
/// but owned by neither; deleting a member unassigns tasks and leaves the
/// member's time entries in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub hourly_rate: Option<f64>,
    pub role: Option<String>,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        hourly_rate: Option<f64>,
        role: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email,
            avatar: None,
            hourly_rate,
            role,
        }
    }
}
