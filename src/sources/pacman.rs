// src/sources/pacman.rs

//! Query explicitly installed packages from pacman-family tools
//!
//! The Arch-style tools (pacman, paru, yay) share a compatible query
//! flag surface, so one invocation path covers all of them.

use crate::error::{Error, Result};
use crate::sources::stdout_lines;
use clap::ValueEnum;
use std::fmt;
use std::process::Command;
use tracing::debug;

/// Which pacman-family binary to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PacmanUtil {
    Pacman,
    Paru,
    Yay,
}

impl PacmanUtil {
    pub fn binary(&self) -> &str {
        match self {
            PacmanUtil::Pacman => "pacman",
            PacmanUtil::Paru => "paru",
            PacmanUtil::Yay => "yay",
        }
    }
}

impl fmt::Display for PacmanUtil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// List installed package names via `util`.
///
/// Only `explicit = true` is implemented: packages the user asked for,
/// excluding ones pulled in as dependencies. Requesting the
/// dependency-only listing fails fast with `NotSupported` rather than
/// returning wrong data.
pub fn list_packages(util: PacmanUtil, explicit: bool) -> Result<Vec<String>> {
    if !explicit {
        return Err(Error::NotSupported(
            "listing dependency-only packages is not yet implemented".to_string(),
        ));
    }

    debug!("Querying explicitly installed packages via {}", util);

    let binary = util.binary();
    if which::which(binary).is_err() {
        return Err(Error::ExternalTool(format!(
            "{} not found in PATH; is it installed?",
            binary
        )));
    }

    let output = Command::new(binary)
        .args(["--query", "--quiet", "--explicit"])
        .output()
        .map_err(|e| Error::ExternalTool(format!("failed to run {}: {}", binary, e)))?;

    if !output.status.success() {
        return Err(Error::ExternalTool(format!(
            "{} --query failed: {}",
            binary,
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    let packages = stdout_lines(&output.stdout);
    debug!("Found {} explicitly installed package(s)", packages.len());
    Ok(packages)
}
