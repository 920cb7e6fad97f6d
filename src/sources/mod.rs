// src/sources/mod.rs

//! External package-manager collaborators
//!
//! Each source shells out to the corresponding system tool and returns
//! plain application names. Exactly two kinds are supported: flatpak
//! (user-facing apps) and the pacman family (explicitly installed
//! packages). Anything else fails with `UnsupportedPackageManager`
//! before any store access occurs.

pub mod flatpak;
pub mod pacman;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub use pacman::PacmanUtil;

/// The supported package-manager kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Flatpak,
    Pacman,
}

impl PackageManagerKind {
    pub fn as_str(&self) -> &str {
        match self {
            PackageManagerKind::Flatpak => "flatpak",
            PackageManagerKind::Pacman => "pacman",
        }
    }

    /// Pull installed application names from this source.
    ///
    /// `util` only matters for the pacman family, where it selects the
    /// query binary (pacman itself or an AUR helper).
    pub fn list_installed(&self, util: PacmanUtil) -> Result<Vec<String>> {
        match self {
            PackageManagerKind::Flatpak => flatpak::list_apps(),
            PackageManagerKind::Pacman => pacman::list_packages(util, true),
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManagerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flatpak" => Ok(PackageManagerKind::Flatpak),
            "pacman" => Ok(PackageManagerKind::Pacman),
            other => Err(Error::UnsupportedPackageManager(format!(
                "'{}' (supported: flatpak, pacman)",
                other
            ))),
        }
    }
}

/// Split subprocess stdout into trimmed, non-empty lines.
pub(crate) fn stdout_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
