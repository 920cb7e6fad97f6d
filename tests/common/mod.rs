// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use applist::db;
use applist::{ConfirmPrompt, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a fresh, initialized test database.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_test_db() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("applist.db");
    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}

/// Open a connection to a test database.
pub fn open(db_path: &PathBuf) -> Connection {
    db::open(db_path).unwrap()
}

/// Total number of rows in the apps table.
pub fn app_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM apps", [], |row| row.get(0))
        .unwrap()
}

/// Total number of rows across all three tables.
pub fn total_row_count(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT (SELECT COUNT(*) FROM devices)
              + (SELECT COUNT(*) FROM package_managers)
              + (SELECT COUNT(*) FROM apps)",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

/// Scripted confirmation responder for driving the resolver in tests.
pub struct ScriptedPrompt {
    pub answer: bool,
    pub calls: usize,
}

impl ScriptedPrompt {
    pub fn always_yes() -> Self {
        Self {
            answer: true,
            calls: 0,
        }
    }

    pub fn always_no() -> Self {
        Self {
            answer: false,
            calls: 0,
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        self.calls += 1;
        Ok(self.answer)
    }
}
