//! Whole-state snapshot persistence.
//!
//! # Responsibility
//! - Define the store contract the service layer persists through.
//! - Keep storage details behind the [`SnapshotStore`] trait.
//!
//! # Invariants
//! - A snapshot is always written as one complete unit; there is no
//!   per-entity persistence.
//! - Every stored snapshot carries an explicit schema version; loading a
//!   version newer than [`SNAPSHOT_SCHEMA_VERSION`] fails instead of
//!   guessing.

use crate::db::DbError;
use crate::model::workspace::Workspace;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteSnapshotStore;

/// Version of the serialized snapshot payload this binary writes and reads.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Storage key a deployment persists its single snapshot under.
pub const DEFAULT_STORAGE_KEY: &str = "taskfolio-workspace";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    UnsupportedSnapshotVersion {
        found: u32,
        latest_supported: u32,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot payload: {err}"),
            Self::Decode(err) => write!(f, "failed to decode snapshot payload: {err}"),
            Self::UnsupportedSnapshotVersion {
                found,
                latest_supported,
            } => write!(
                f,
                "snapshot schema version {found} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::UnsupportedSnapshotVersion { .. } => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the whole-state snapshot.
pub trait SnapshotStore {
    /// Loads the previously saved state, or `None` on first run.
    fn load(&self) -> SnapshotResult<Option<Workspace>>;

    /// Overwrites the stored state with `workspace`, as one complete unit.
    fn save(&self, workspace: &Workspace) -> SnapshotResult<()>;
}
