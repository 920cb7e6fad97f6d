// src/commands/add.rs

//! The `add` command: pull installed application names from a package
//! manager and record them for a device.

use crate::db;
use crate::error::Result;
use crate::ingest::ingest;
use crate::resolver::{self, TerminalPrompt};
use crate::sources::{PackageManagerKind, PacmanUtil};
use std::path::Path;
use tracing::info;

/// Record the applications installed via `package_manager` on `device`.
///
/// The kind string is validated first, so an unsupported package
/// manager fails before the database is opened. Resolution of the
/// device and package-manager references may prompt the operator.
pub fn cmd_add(device: &str, package_manager: &str, util: PacmanUtil, db_path: &Path) -> Result<()> {
    // Validate before any store access
    let kind: PackageManagerKind = package_manager.parse()?;

    let mut conn = db::init(db_path)?;

    let mut prompt = TerminalPrompt;
    let device_id = resolver::resolve_device(&conn, device, &mut prompt)?;
    let pm_id = resolver::resolve_package_manager(&conn, kind.as_str(), &mut prompt)?;

    let names = kind.list_installed(util)?;
    let count = ingest(&mut conn, &names, device_id, pm_id)?;

    info!(
        "Recorded {} application(s) from {} for device '{}'",
        count, kind, device
    );
    println!(
        "Recorded {} application(s) from {} for device '{}'",
        count, kind, device
    );
    Ok(())
}
