// src/db/mod.rs

//! SQLite connection management for applist
//!
//! Every logical operation opens a scoped connection through [`open`] and
//! releases it when the handle drops, including on error paths. Batch
//! writes go through [`transaction`] so partial failure rolls the whole
//! batch back.

pub mod models;
pub mod paths;
pub mod schema;

use crate::error::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::debug;

/// Open a connection to the database at `path`.
///
/// Enables foreign keys and switches the journal to WAL mode. WAL is not
/// required for correctness, only for concurrent-read robustness. Opening
/// a file that exists but is not an SQLite database fails here, because
/// the pragmas are the first statements to touch the file.
pub fn open(path: &Path) -> Result<Connection> {
    debug!("Opening database at {}", path.display());
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    // journal_mode returns the resulting mode as a row
    let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
    Ok(conn)
}

/// Open the database at `path`, creating it and its schema if needed.
///
/// An empty file is treated as "not yet initialized"; the schema is
/// created into it. Idempotent against an already-initialized database.
pub fn init(path: &Path) -> Result<Connection> {
    let conn = open(path)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction. Commits on `Ok`, rolls back on `Err`
/// (via drop), so no partial state is observable either way.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}
