//! Core domain logic for Taskfolio.
//! This crate is the single source of truth for project, task, team, client
//! and time-tracking invariants.
//!
//! The crate exposes exactly two surfaces to UI/report shells:
//! - [`service::WorkspaceService`] for every state mutation, and
//! - [`metrics`] for every derived read-only view.
//!
//! No other access path to the entity collections exists.

pub mod clock;
pub mod db;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod service;
pub mod snapshot;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientId};
pub use model::member::{Member, MemberId, DEFAULT_HOURLY_RATE};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use model::task::{Priority, Task, TaskId};
pub use model::time_entry::{TimeEntry, TimeEntryId};
pub use model::workspace::Workspace;
pub use service::{
    ClientPatch, MemberPatch, ProjectPatch, ServiceResult, TaskPatch, TimeEntryPatch,
    WorkspaceError, WorkspaceService,
};
pub use snapshot::{
    SnapshotError, SnapshotResult, SnapshotStore, SqliteSnapshotStore, DEFAULT_STORAGE_KEY,
    SNAPSHOT_SCHEMA_VERSION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
