// src/db/paths.rs
//! Default database location

use std::path::PathBuf;

/// Default database file: `applist.db` in the user's home directory.
///
/// Falls back to the current directory when no home directory can be
/// determined (containers, stripped-down service environments).
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("applist.db")
}
