//! Schema upgrades for the session database.
//!
//! focustrack keeps everything in one `kv_store` table; the session list is a
//! single JSON value under `@focus_sessions`. SQLite's `user_version` pragma
//! records how many entries of [`MIGRATIONS`] a database file has applied, so
//! a file written by an older build is brought forward on open and a newer
//! file is left alone.

use rusqlite::Connection;

use crate::error::FocusError;

type Migration = fn(&Connection) -> Result<(), FocusError>;

/// Ordered schema steps. Entry `n` upgrades a database from version `n` to
/// `n + 1`; append only.
const MIGRATIONS: &[Migration] = &[create_kv_store];

/// Schema version this build writes.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const CURRENT_VERSION: i32 = MIGRATIONS.len() as i32;

/// Read the stored schema version. A database that focustrack has never
/// opened reads as 0.
///
/// # Errors
///
/// Returns an error if the pragma cannot be queried.
pub fn get_version(conn: &Connection) -> Result<i32, FocusError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| FocusError::Database(format!("Failed to read schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), FocusError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| FocusError::Database(format!("Failed to record schema version: {e}")))
}

/// Bring the session database up to [`CURRENT_VERSION`].
///
/// Each pending step runs and is recorded before the next one starts, so an
/// interrupted upgrade resumes where it stopped. Files from a newer build
/// are opened as they are and a warning is logged.
///
/// # Errors
///
/// Returns an error if a step or the version bookkeeping fails.
pub fn run(conn: &Connection) -> Result<(), FocusError> {
    let current = get_version(conn)?;

    if current > CURRENT_VERSION {
        log::warn!(
            "session database is at schema v{current}, newer than v{CURRENT_VERSION}; opening as is"
        );
        return Ok(());
    }

    for (version, migrate) in (1..).zip(MIGRATIONS).skip(usize::try_from(current).unwrap_or(0)) {
        log::debug!("upgrading session database to schema v{version}");
        migrate(conn)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// v1: string-valued key-value table holding the session collection.
fn create_kv_store(conn: &Connection) -> Result<(), FocusError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| FocusError::Database(format!("Failed to create kv_store: {e}")))
}
