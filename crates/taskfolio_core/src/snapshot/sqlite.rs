//! SQLite-backed snapshot store.
//!
//! One row per storage key in the `snapshots` table; `save` replaces the row
//! wholesale so a snapshot is never observable half-written.

use crate::clock;
use crate::model::workspace::Workspace;
use crate::snapshot::{
    SnapshotError, SnapshotResult, SnapshotStore, DEFAULT_STORAGE_KEY, SNAPSHOT_SCHEMA_VERSION,
};
use log::{error, info};
use rusqlite::{params, Connection};

/// Snapshot store writing to a migrated SQLite connection.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
    storage_key: String,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    /// Creates a store using the fixed deployment storage key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_storage_key(conn, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store over a caller-chosen storage key.
    pub fn with_storage_key(conn: &'conn Connection, storage_key: impl Into<String>) -> Self {
        Self {
            conn,
            storage_key: storage_key.into(),
        }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self) -> SnapshotResult<Option<Workspace>> {
        let mut stmt = self.conn.prepare(
            "SELECT schema_version, payload
             FROM snapshots
             WHERE storage_key = ?1;",
        )?;

        let mut rows = stmt.query(params![self.storage_key])?;
        let Some(row) = rows.next()? else {
            info!("event=snapshot_load module=snapshot status=empty key={}", self.storage_key);
            return Ok(None);
        };

        let schema_version: u32 = row.get(0)?;
        if schema_version > SNAPSHOT_SCHEMA_VERSION {
            error!(
                "event=snapshot_load module=snapshot status=error key={} error_code=version_ahead found={}",
                self.storage_key, schema_version
            );
            return Err(SnapshotError::UnsupportedSnapshotVersion {
                found: schema_version,
                latest_supported: SNAPSHOT_SCHEMA_VERSION,
            });
        }

        let payload: String = row.get(1)?;
        let workspace = serde_json::from_str(&payload).map_err(SnapshotError::Decode)?;
        info!(
            "event=snapshot_load module=snapshot status=ok key={} bytes={}",
            self.storage_key,
            payload.len()
        );
        Ok(Some(workspace))
    }

    fn save(&self, workspace: &Workspace) -> SnapshotResult<()> {
        let payload = serde_json::to_string(workspace).map_err(SnapshotError::Encode)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO snapshots (storage_key, schema_version, payload, saved_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                self.storage_key,
                SNAPSHOT_SCHEMA_VERSION,
                payload,
                clock::now_rfc3339(),
            ],
        )?;

        info!(
            "event=snapshot_save module=snapshot status=ok key={} bytes={}",
            self.storage_key,
            payload.len()
        );
        Ok(())
    }
}
