// src/commands/mod.rs
//! Command handlers for the applist CLI

mod add;
mod gui;
mod show;

pub use add::cmd_add;
pub use gui::cmd_gui;
pub use show::cmd_show;

use std::path::PathBuf;

/// Database path for a command: the explicit `-d/--db-path` flag when
/// given, otherwise the per-user default.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> PathBuf {
    db_path.unwrap_or_else(crate::db::paths::default_db_path)
}
