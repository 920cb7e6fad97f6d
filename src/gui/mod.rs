// src/gui/mod.rs

//! Desktop list view for the recorded applications
//!
//! A single sortable table over the same query the CLI uses, with a
//! live toggle for the distinct filter. Toggling re-runs the query and
//! replaces the displayed rows; no incremental diffing.

mod app;

use crate::error::{Error, Result};
use std::path::PathBuf;

pub use app::AppListApp;

/// Open the list view over the database at `db_path`.
///
/// Blocks until the window is closed.
pub fn run(db_path: PathBuf, distinct: bool) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "applist",
        options,
        Box::new(move |_cc| Ok(Box::new(AppListApp::new(db_path, distinct)))),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}
