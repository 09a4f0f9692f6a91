//! Task record and priority scale.

use crate::clock;
use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Urgency scale for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(ParsePriorityError {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    value: String,
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid priority '{}': expected low, medium, high or urgent",
            self.value
        )
    }
}

impl Error for ParsePriorityError {}

/// A unit of work owned by exactly one project.
///
/// # Invariants
/// - `project_id` is set at creation and never changes.
/// - `order` is the display position among sibling tasks; new tasks take
///   `max(sibling order) + 1`, or 0 when the project has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub complete: bool,
    pub assignee_id: Option<MemberId>,
    pub project_id: ProjectId,
    pub priority: Priority,
    /// ISO `YYYY-MM-DD` date string.
    pub due_date: Option<String>,
    pub order: i64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Task {
    /// Creates an incomplete task at the given sibling order.
    pub fn new(
        project_id: ProjectId,
        name: impl Into<String>,
        assignee_id: Option<MemberId>,
        priority: Priority,
        due_date: Option<String>,
        order: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            complete: false,
            assignee_id,
            project_id,
            priority,
            due_date,
            order,
            created_at: clock::now_rfc3339(),
        }
    }
}
