//! Mutation engine over the workspace.
//!
//! # Responsibility
//! - Apply every create/update/delete operation, including cascade rules.
//! - Persist the whole state through the snapshot store after each mutation.
//! - Run status reconciliation where task mutations require it.
//!
//! # Invariants
//! - Every public mutation ends with one `SnapshotStore::save` call; the
//!   persistence contract is explicit, not middleware magic.
//! - Update/delete with an unknown id is a silent no-op, not an error.
//! - Cascades never leave an owned child behind (project -> tasks -> time
//!   entries); referenced-but-not-owned records are unlinked, not deleted.

use crate::model::workspace::Workspace;
use crate::snapshot::{SnapshotError, SnapshotStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod clients;
mod members;
mod projects;
pub(crate) mod reconcile;
mod tasks;
mod time_entries;

pub use clients::ClientPatch;
pub use members::MemberPatch;
pub use projects::ProjectPatch;
pub use tasks::TaskPatch;
pub use time_entries::TimeEntryPatch;

pub type ServiceResult<T> = Result<T, WorkspaceError>;

/// Error surface of the mutation engine.
///
/// In-memory transformations cannot fail; the only failure source is the
/// persistence boundary.
#[derive(Debug)]
pub enum WorkspaceError {
    Snapshot(SnapshotError),
}

impl Display for WorkspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for WorkspaceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

/// The single read/write surface over one in-memory workspace.
///
/// One instance per process: loaded once at startup, mutated for the whole
/// session, saved after every mutation.
pub struct WorkspaceService<S: SnapshotStore> {
    workspace: Workspace,
    store: S,
}

impl<S: SnapshotStore> WorkspaceService<S> {
    /// Loads the saved state from `store`, falling back to the seeded
    /// first-run workspace when nothing has been saved yet.
    pub fn load(store: S) -> ServiceResult<Self> {
        let workspace = store.load()?.unwrap_or_else(Workspace::first_run);
        Ok(Self { workspace, store })
    }

    /// Read access for the metrics layer and UI shells.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub(crate) fn persist(&self) -> ServiceResult<()> {
        self.store.save(&self.workspace)?;
        Ok(())
    }
}
