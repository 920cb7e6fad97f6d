// src/resolver.rs

//! Reference resolution: look up a device or package manager by name,
//! creating it after user confirmation when absent.
//!
//! The confirmation step is a side-effecting boundary call, so it is
//! injected as a capability rather than wired to a terminal here. The
//! prompt is invoked at most once per unresolved name per operation.

use crate::db::models::{Device, PackageManager};
use crate::error::{Error, Result};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Injected confirmation capability.
///
/// Production code uses [`TerminalPrompt`]; tests swap in scripted
/// responders.
pub trait ConfirmPrompt {
    /// Ask the operator to confirm `message`. Blocks until answered.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Interactive yes/no prompt on stdin/stdout.
///
/// Blocks the calling thread with no timeout; acceptable for a
/// single-operator local tool.
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} [y/N]: ", message)?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Resolve a device name to its id, inserting it after confirmation
/// when absent.
///
/// A declined prompt fails with [`Error::UserAborted`] and leaves the
/// store untouched.
pub fn resolve_device(
    conn: &Connection,
    name: &str,
    prompt: &mut dyn ConfirmPrompt,
) -> Result<i64> {
    if let Some(device) = Device::find_by_name(conn, name)? {
        debug!("Device '{}' resolved to id {:?}", name, device.id);
        return device
            .id
            .ok_or_else(|| Error::Integrity(format!("device '{}' has no id", name)));
    }

    let message = format!("Device '{}' is not present in the database. Add it?", name);
    if !prompt.confirm(&message)? {
        return Err(Error::UserAborted(format!(
            "not adding device '{}', quitting",
            name
        )));
    }

    let id = Device::new(name.to_string()).insert(conn)?;
    debug!("Created device '{}' with id {}", name, id);
    Ok(id)
}

/// Resolve a package-manager name to its id, inserting it after
/// confirmation when absent. Symmetric to [`resolve_device`].
pub fn resolve_package_manager(
    conn: &Connection,
    name: &str,
    prompt: &mut dyn ConfirmPrompt,
) -> Result<i64> {
    if let Some(pm) = PackageManager::find_by_name(conn, name)? {
        debug!("Package manager '{}' resolved to id {:?}", name, pm.id);
        return pm
            .id
            .ok_or_else(|| Error::Integrity(format!("package manager '{}' has no id", name)));
    }

    let message = format!(
        "Package manager '{}' is not present in the database. Add it?",
        name
    );
    if !prompt.confirm(&message)? {
        return Err(Error::UserAborted(format!(
            "not adding package manager '{}', quitting",
            name
        )));
    }

    let id = PackageManager::new(name.to_string()).insert(conn)?;
    debug!("Created package manager '{}' with id {}", name, id);
    Ok(id)
}
