// src/cli.rs

//! CLI definitions for applist
//!
//! Command-line interface definitions using clap. The actual command
//! implementations are in the `commands` module.
//!
//! Note that `add` takes the package-manager kind as a plain string:
//! validation happens in the command handler so an unknown kind maps to
//! our own error taxonomy (and exit code) before the database is ever
//! opened.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::sources::PacmanUtil;

#[derive(Parser)]
#[command(name = "applist")]
#[command(version)]
#[command(about = "Track which applications are installed on which devices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record installed applications for a device
    Add {
        /// Name of the device the applications are installed on
        device: String,

        /// Package manager to pull applications from (flatpak or pacman)
        package_manager: String,

        /// Pacman-family binary to invoke for the query
        #[arg(long, value_enum, default_value_t = PacmanUtil::Paru)]
        util: PacmanUtil,

        /// Path to the database file (default: ~/applist.db)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Show all recorded applications
    Show {
        /// Only show applications installed on exactly one device
        #[arg(long)]
        distinct: bool,

        /// Path to the database file (default: ~/applist.db)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Open the desktop list view
    Gui {
        /// Start with the distinct filter enabled
        #[arg(long)]
        distinct: bool,

        /// Path to the database file (default: ~/applist.db)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
