//! Project record and lifecycle status.
//!
//! # Invariants
//! - `progress` tracks the completed-task ratio whenever the project has
//!   tasks; it is recomputed by the service layer, not by callers.
//! - `status` follows the NotStarted -> InProgress -> Completed machine with
//!   a Completed -> InProgress back-edge; direct updates may still override
//!   it until the next task mutation.

use crate::clock;
use crate::model::client::ClientId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not_started",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseProjectStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '-'], "_");
        match normalized.as_str() {
            "not_started" => Ok(ProjectStatus::NotStarted),
            "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" | "complete" => Ok(ProjectStatus::Completed),
            _ => Err(ParseProjectStatusError {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectStatusError {
    value: String,
}

impl fmt::Display for ParseProjectStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid project status '{}': expected one of {}",
            self.value,
            ProjectStatus::ALL
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Error for ParseProjectStatusError {}

/// A client engagement grouping tasks under one budget and due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    /// Completed-task ratio in percent, 0-100.
    pub progress: u8,
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD` date string.
    pub due_date: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub client_id: Option<ClientId>,
    /// Agreed budget; doubles as the revenue figure in reporting.
    pub budget: Option<f64>,
}

impl Project {
    /// Creates a project in its initial `NotStarted` state with zero progress.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        due_date: Option<String>,
        client_id: Option<ClientId>,
        budget: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: ProjectStatus::NotStarted,
            progress: 0,
            description,
            due_date,
            created_at: clock::now_rfc3339(),
            client_id,
            budget,
        }
    }
}
