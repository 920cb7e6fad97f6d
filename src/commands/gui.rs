// src/commands/gui.rs

//! The `gui` command: open the desktop list view.

use crate::error::Result;
use std::path::Path;

#[cfg(feature = "gui")]
pub fn cmd_gui(distinct: bool, db_path: &Path) -> Result<()> {
    crate::gui::run(db_path.to_path_buf(), distinct)
}

#[cfg(not(feature = "gui"))]
pub fn cmd_gui(_distinct: bool, _db_path: &Path) -> Result<()> {
    Err(crate::error::Error::NotSupported(
        "this build has no desktop view; rebuild with --features gui".to_string(),
    ))
}
