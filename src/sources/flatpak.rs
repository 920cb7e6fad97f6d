// src/sources/flatpak.rs

//! Query installed flatpak applications
//!
//! Uses `flatpak list --app` so only user-facing applications are
//! returned, not runtime or library packages.

use crate::error::{Error, Result};
use crate::sources::stdout_lines;
use std::process::Command;
use tracing::debug;

/// List the names of all installed flatpak applications.
pub fn list_apps() -> Result<Vec<String>> {
    debug!("Querying installed flatpak applications");

    if which::which("flatpak").is_err() {
        return Err(Error::ExternalTool(
            "flatpak not found in PATH; is flatpak installed?".to_string(),
        ));
    }

    let output = Command::new("flatpak")
        .args(["list", "--app", "--columns=name"])
        .output()
        .map_err(|e| Error::ExternalTool(format!("failed to run flatpak: {}", e)))?;

    if !output.status.success() {
        return Err(Error::ExternalTool(format!(
            "flatpak list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    let apps = stdout_lines(&output.stdout);
    debug!("Found {} installed flatpak application(s)", apps.len());
    Ok(apps)
}

/// Check if flatpak is available on this system
pub fn is_available() -> bool {
    which::which("flatpak").is_ok()
}
